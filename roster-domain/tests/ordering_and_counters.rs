//! 自然排序、键排序、计数隔离与多态分发
use std::cmp::Reverse;

use chrono::NaiveDate;
use roster_domain::individual::{Individual, natural_order};
use roster_domain::person::Person;
use roster_domain::registry::Registry;
use roster_domain::student::Student;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn person(name: &str, born: NaiveDate, registry: &Registry) -> Person {
    Person::builder()
        .name(name)
        .date_of_birth(born)
        .registry(registry)
        .build()
        .unwrap()
}

// 自然升序：最年轻在前，出生最早在后
#[test]
fn natural_sort_places_youngest_first() {
    let registry = Registry::new();
    let mut people = vec![
        person("Anna", date(1986, 1, 13), &registry),
        person("Mike", date(2001, 6, 24), &registry),
        person("John", date(1995, 8, 3), &registry),
    ];

    people.sort();

    let names: Vec<&str> = people.iter().map(Person::name).collect();
    assert_eq!(names, ["Mike", "John", "Anna"]);
}

// 以出生日期为键的倒序排序复现自然顺序；正序则得到互补顺序
#[test]
fn key_sort_matches_natural_order() {
    let registry = Registry::new();
    let mut people = vec![
        person("Anna", date(1986, 1, 13), &registry),
        person("Mike", date(2001, 6, 24), &registry),
        person("John", date(1995, 8, 3), &registry),
    ];

    people.sort_by_key(|p| Reverse(p.date_of_birth()));
    let names: Vec<&str> = people.iter().map(Person::name).collect();
    assert_eq!(names, ["Mike", "John", "Anna"]);

    people.sort_by_key(|p| p.date_of_birth());
    let names: Vec<&str> = people.iter().map(Person::name).collect();
    assert_eq!(names, ["Anna", "John", "Mike"]);
}

// 两个基础实体加一个学生：人员计数 2、学生计数 1
#[test]
fn counters_are_isolated_per_variant() {
    let registry = Registry::new();

    let _anna = person("Anna", date(1986, 1, 13), &registry);
    let _mike = person("Mike", date(2001, 6, 24), &registry);
    let _john = Student::builder()
        .name("John")
        .date_of_birth(date(1995, 8, 3))
        .university("MIT")
        .registry(&registry)
        .build()
        .unwrap();

    assert_eq!(registry.person_count(), 2);
    assert_eq!(registry.student_count(), 1);

    registry.reset();
    assert_eq!(registry.person_count(), 0);
    assert_eq!(registry.student_count(), 0);
}

// 经由统一引用调用时，问候与表示解析到具体变体
#[test]
fn dynamic_dispatch_resolves_overrides() {
    let registry = Registry::new();
    let people: Vec<Box<dyn Individual>> = vec![
        Box::new(person("Anna", date(1986, 1, 13), &registry)),
        Box::new(
            Student::builder()
                .name("John")
                .date_of_birth(date(1995, 8, 3))
                .university("MIT")
                .registry(&registry)
                .build()
                .unwrap(),
        ),
    ];

    let greetings: Vec<String> = people.iter().map(|p| p.greeting("hi")).collect();
    assert_eq!(greetings[0], "Hi! I am Anna!");
    assert_eq!(greetings[1], "Hi! I am John and I study at MIT.");

    assert!(people[0].describe().starts_with("<Person "));
    assert!(people[1].describe().starts_with("<Student "));

    // 短格式共享同一实现
    assert_eq!(people[0].summary(), "<name='Anna' date_of_birth='1986-01-13'>");
    assert_eq!(people[1].summary(), "<name='John' date_of_birth='1995-08-03'>");
}

// 混合集合按自然顺序排序
#[test]
fn mixed_collection_sorts_by_natural_order() {
    let registry = Registry::new();
    let mut people: Vec<Box<dyn Individual>> = vec![
        Box::new(person("Anna", date(1986, 1, 13), &registry)),
        Box::new(
            Student::builder()
                .name("Mike")
                .date_of_birth(date(2001, 6, 24))
                .university("MIT")
                .registry(&registry)
                .build()
                .unwrap(),
        ),
        Box::new(person("John", date(1995, 8, 3), &registry)),
    ];

    people.sort_by(|a, b| natural_order(a.as_ref(), b.as_ref()));

    let names: Vec<&str> = people.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Mike", "John", "Anna"]);
}

// 跨变体的比较运算与同变体语义一致
#[test]
fn cross_variant_comparisons() {
    let registry = Registry::new();
    let anna = person("Anna", date(1986, 1, 13), &registry);
    let mike = Student::builder()
        .name("Mike")
        .date_of_birth(date(2001, 6, 24))
        .university("MIT")
        .registry(&registry)
        .build()
        .unwrap();

    assert!(mike < anna);
    assert!(anna >= mike);

    let twin = Student::builder()
        .name("Twin")
        .date_of_birth(date(1986, 1, 13))
        .university("MIT")
        .registry(&registry)
        .build()
        .unwrap();
    assert!(anna == twin);
    assert!(twin == anna);
}
