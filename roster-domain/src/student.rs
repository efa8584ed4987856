//! 学生（Student）
//!
//! 人员的一级特化：组合基础记录并追加所属院校。
//! 校验、计龄、变更与排序行为完全沿用基础记录；
//! 问候文本被完整替换，长格式表示在基础形态上拼入院校字段。
//!
use std::cmp::Ordering;
use std::fmt;

use bon::bon;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainResult;
use crate::individual::Individual;
use crate::person::Person;
use crate::registry::Registry;
use crate::text::capitalize;
use crate::value_object::BirthDate;

/// 学生记录：基础人员 + 所属院校
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    person: Person,
    university: String,
}

#[bon]
impl Student {
    /// 构造学生：姓名与出生日期沿用共享的装配与校验路径，
    /// 成功后只在学生计数上登记一次，不影响人员计数
    #[builder]
    pub fn new(
        #[builder(into)] name: String,
        date_of_birth: NaiveDate,
        #[builder(into)] university: String,
        registry: &Registry,
    ) -> DomainResult<Self> {
        let person = Person::assemble(name, date_of_birth)?;
        registry.record_student();
        Ok(Self { person, university })
    }
}

impl Student {
    /// 基础人员视图
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// 姓名
    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// 变更姓名（无格式约束）
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.person.set_name(name);
    }

    /// 在当前姓名后以空格追加姓氏（原地变更）
    pub fn add_last_name(&mut self, last_name: &str) {
        self.person.add_last_name(last_name);
    }

    /// 出生日期
    pub fn date_of_birth(&self) -> BirthDate {
        self.person.date_of_birth()
    }

    /// 变更出生日期；校验行为与基础记录完全一致
    pub fn set_date_of_birth(&mut self, value: NaiveDate) -> DomainResult<()> {
        self.person.set_date_of_birth(value)
    }

    /// 当前整年年龄
    pub fn age(&self) -> i32 {
        self.person.age()
    }

    /// 所属院校
    pub fn university(&self) -> &str {
        &self.university
    }

    /// 变更所属院校（无额外校验）
    pub fn set_university(&mut self, university: impl Into<String>) {
        self.university = university.into();
    }
}

impl Individual for Student {
    fn name(&self) -> &str {
        self.name()
    }

    fn date_of_birth(&self) -> BirthDate {
        self.date_of_birth()
    }

    fn age(&self) -> i32 {
        self.age()
    }

    fn greeting(&self, salutation: &str) -> String {
        format!(
            "{}! I am {} and I study at {}.",
            capitalize(salutation),
            self.name(),
            self.university
        )
    }

    fn describe(&self) -> String {
        // 取基础长格式，在收尾定界符前拼入院校字段
        let base = self.person.long_form("Student");
        let body = base.strip_suffix('>').unwrap_or(&base);
        format!("{} university='{}'>", body, self.university)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
    }
}

impl Eq for Student {}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        self.person.cmp(&other.person)
    }
}

impl PartialEq<Person> for Student {
    fn eq(&self, other: &Person) -> bool {
        self.date_of_birth() == other.date_of_birth()
    }
}

impl PartialOrd<Person> for Student {
    fn partial_cmp(&self, other: &Person) -> Option<Ordering> {
        Some(other.date_of_birth().cmp(&self.date_of_birth()))
    }
}
