use anyhow::Result;
use chrono::NaiveDate;
use roster_domain::individual::{Individual, natural_order};
use roster_domain::person::Person;
use roster_domain::registry::Registry;
use roster_domain::student::Student;
use std::cmp::Reverse;

fn main() -> Result<()> {
    let registry = Registry::new();
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    // 构造两名人员
    let mut anna = Person::builder()
        .name("Anna")
        .date_of_birth(date(1986, 1, 13))
        .registry(&registry)
        .build()?;
    let mike = Person::builder()
        .name("Mike")
        .date_of_birth(date(2001, 6, 24))
        .registry(&registry)
        .build()?;
    println!("{} {}", anna, mike);
    println!("persons so far: {}", registry.person_count());

    // 追加姓氏并互致问候
    anna.add_last_name("Smith");
    println!("{}", anna.greeting("hi"));
    println!("{}", mike.greeting("hello"));

    // 比较运算：自然顺序按出生日期倒序
    println!("Anna is younger than Mike: {}", anna < mike);
    println!("Anna is older than Mike: {}", anna >= mike);

    // 自然排序（最年轻在前）与按键排序
    let mut people = vec![
        anna.clone(),
        mike.clone(),
        Person::builder()
            .name("John")
            .date_of_birth(date(1995, 8, 3))
            .registry(&registry)
            .build()?,
    ];
    people.sort();
    println!("sorted: {:?}", names(&people));
    people.sort_by_key(|p| Reverse(p.date_of_birth()));
    println!("sorted by Reverse(date_of_birth): {:?}", names(&people));

    println!("years since 1995-12-25: {}", Person::years_since(date(1995, 12, 25)));

    // 越界变更被拒绝，原值保留
    println!("{}", anna.date_of_birth());
    if let Err(err) = anna.set_date_of_birth(date(1887, 1, 13)) {
        println!("{}", err);
    }
    println!("{}", anna.date_of_birth());

    // 越界构造同样被拒绝，且不计数
    if let Err(err) = Person::builder()
        .name("Jane")
        .date_of_birth(date(1895, 8, 3))
        .registry(&registry)
        .build()
    {
        println!("{}", err);
    }
    println!("persons after rejection: {}", registry.person_count());

    // 特化变体：学生覆写问候与长格式表示
    let maria = Student::builder()
        .name("Maria")
        .date_of_birth(date(1998, 5, 11))
        .university("MIT")
        .registry(&registry)
        .build()?;
    println!("students: {}", registry.student_count());
    println!("{}", maria.describe());

    // 经由统一引用分发到具体变体
    let mut everyone: Vec<Box<dyn Individual>> = vec![Box::new(anna.clone()), Box::new(maria)];
    everyone.sort_by(|a, b| natural_order(a.as_ref(), b.as_ref()));
    for p in &everyone {
        println!("{}", p.greeting("hi"));
    }

    println!("{} is {} years old.", anna.name(), anna.age());
    Ok(())
}

fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(Person::name).collect()
}
