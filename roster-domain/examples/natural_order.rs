//! 自然顺序使用示例
//!
//! 展示实体的倒序比较语义、自然排序与按键排序的关系。
//!
//! 运行示例：
//! ```bash
//! cargo run -p roster-domain --example natural_order
//! ```

use std::cmp::Reverse;

use chrono::NaiveDate;
use roster_domain::person::Person;
use roster_domain::registry::Registry;

fn main() {
    println!("=== 自然顺序使用示例 ===\n");

    let registry = Registry::new();
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    let person = |name: &str, born| {
        Person::builder()
            .name(name)
            .date_of_birth(born)
            .registry(&registry)
            .build()
            .unwrap()
    };

    // 1. 比较运算：越年轻越“小”
    println!("1. 比较运算");
    let anna = person("Anna", date(1986, 1, 13));
    let mike = person("Mike", date(2001, 6, 24));
    println!("   {} / {}", anna, mike);
    println!("   mike < anna: {}", mike < anna);
    println!("   anna >= mike: {}\n", anna >= mike);

    // 2. 自然排序：最年轻在前
    println!("2. 自然排序");
    let mut people = vec![anna.clone(), mike.clone(), person("John", date(1995, 8, 3))];
    people.sort();
    for p in &people {
        println!("   {}", p);
    }

    // 3. 按键排序：Reverse(出生日期) 复现自然顺序，正序得到互补顺序
    println!("\n3. 按键排序");
    people.sort_by_key(|p| Reverse(p.date_of_birth()));
    println!("   Reverse(date_of_birth): {:?}", names(&people));
    people.sort_by_key(|p| p.date_of_birth());
    println!("   date_of_birth:          {:?}", names(&people));

    println!("\n=== 示例完成 ===");
}

fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(Person::name).collect()
}
