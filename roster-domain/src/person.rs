//! 人员（Person）
//!
//! 携带校验不变量的基础记录：
//! - 姓名可随意变更；出生日期的每次赋值（含构造）都经过统一校验；
//! - 年龄为派生值，随查询即时计算，不落存储；
//! - 比较运算实现自然顺序：按出生日期倒序，越年轻越“小”。
//!
use std::cmp::Ordering;
use std::fmt;

use bon::bon;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainResult;
use crate::individual::Individual;
use crate::registry::Registry;
use crate::student::Student;
use crate::text::capitalize;
use crate::value_object::{BirthDate, local_today, years_between};

/// 基础人员记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    name: String,
    date_of_birth: BirthDate,
}

#[bon]
impl Person {
    /// 构造人员：出生日期校验通过后，在注入的登记处计数一次
    ///
    /// 构造具有事务性：校验失败不产生实例，也不触碰计数。
    ///
    /// # 示例
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use roster_domain::person::Person;
    /// use roster_domain::registry::Registry;
    ///
    /// let registry = Registry::new();
    /// let anna = Person::builder()
    ///     .name("Anna")
    ///     .date_of_birth(NaiveDate::from_ymd_opt(1986, 1, 13).unwrap())
    ///     .registry(&registry)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(anna.name(), "Anna");
    /// assert_eq!(registry.person_count(), 1);
    /// ```
    #[builder]
    pub fn new(
        #[builder(into)] name: String,
        date_of_birth: NaiveDate,
        registry: &Registry,
    ) -> DomainResult<Self> {
        let person = Self::assemble(name, date_of_birth)?;
        registry.record_person();
        Ok(person)
    }
}

impl Person {
    /// 仅校验与装配，不计数；供两个变体的构造路径共用
    pub(crate) fn assemble(name: String, date_of_birth: NaiveDate) -> DomainResult<Self> {
        Ok(Self {
            name,
            date_of_birth: BirthDate::new(date_of_birth)?,
        })
    }

    /// 姓名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 变更姓名（无格式约束）
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// 在当前姓名后以空格追加姓氏（原地变更）
    pub fn add_last_name(&mut self, last_name: &str) {
        self.name = format!("{} {}", self.name, last_name);
    }

    /// 出生日期
    pub fn date_of_birth(&self) -> BirthDate {
        self.date_of_birth
    }

    /// 变更出生日期；每次调用都重新校验，失败时保留原值
    pub fn set_date_of_birth(&mut self, value: NaiveDate) -> DomainResult<()> {
        self.date_of_birth = BirthDate::new(value)?;
        Ok(())
    }

    /// 当前整年年龄（派生值，不存储）
    pub fn age(&self) -> i32 {
        self.date_of_birth.age_at(local_today())
    }

    /// 任意日期距今的整年数；与年龄共用同一公式，无需实例
    pub fn years_since(date: NaiveDate) -> i32 {
        years_between(date, local_today())
    }

    /// 长格式表示；`kind` 为具体变体类型名，特化在此基础上拼接
    pub(crate) fn long_form(&self, kind: &str) -> String {
        format!(
            "<{} name='{}' date_of_birth='{}'>",
            kind, self.name, self.date_of_birth
        )
    }
}

impl Individual for Person {
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
        format!("{}! I am {}!", capitalize(salutation), self.name)
    }

    fn describe(&self) -> String {
        self.long_form("Person")
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

// 自然顺序（与相等性）只由出生日期定义，保持 Ord 的一致性约束；
// 姓名相等与否请通过访问器比较。
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.date_of_birth == other.date_of_birth
    }
}

impl Eq for Person {}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        other.date_of_birth.cmp(&self.date_of_birth)
    }
}

// 跨变体比较：顺序语义与同变体一致，特化字段不参与
impl PartialEq<Student> for Person {
    fn eq(&self, other: &Student) -> bool {
        self.date_of_birth == other.date_of_birth()
    }
}

impl PartialOrd<Student> for Person {
    fn partial_cmp(&self, other: &Student) -> Option<Ordering> {
        Some(other.date_of_birth().cmp(&self.date_of_birth))
    }
}
