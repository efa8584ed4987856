//! 实例登记（Registry）
//!
//! 以显式注入的计数上下文取代按类型隐藏的全局状态：
//! 每个变体独立计数，仅成功的构造会登记一次；
//! 失败的构造不触碰计数（构造的事务性由构造路径保证）。
//!
use std::sync::atomic::{AtomicU64, Ordering};

/// 单变体实例计数器
///
/// 登记采用原子自增：即使登记处被跨线程共享，
/// “每次成功构造恰好计数一次”的约束依然成立。
#[derive(Debug, Default)]
pub struct InstanceCounter(AtomicU64);

impl InstanceCounter {
    /// 登记一次构造，返回登记后的计数值
    pub(crate) fn record(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// 当前计数值
    pub fn value(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// 清零
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

/// 按变体独立计数的登记处；构造实体时以引用方式注入
///
/// 登记动作由构造路径在 crate 内部触发，外部代码无法绕过构造改写计数；
/// 测试用例之间可通过新建登记处或 [`Registry::reset`] 复位。
///
/// # 示例
///
/// ```
/// use chrono::NaiveDate;
/// use roster_domain::person::Person;
/// use roster_domain::registry::Registry;
///
/// let registry = Registry::new();
/// let date = NaiveDate::from_ymd_opt(1986, 1, 13).unwrap();
/// let _anna = Person::builder()
///     .name("Anna")
///     .date_of_birth(date)
///     .registry(&registry)
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.person_count(), 1);
/// assert_eq!(registry.student_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    persons: InstanceCounter,
    students: InstanceCounter,
}

impl Registry {
    /// 创建空登记处
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_person(&self) {
        self.persons.record();
    }

    pub(crate) fn record_student(&self) {
        self.students.record();
    }

    /// 已成功构造的人员数量
    pub fn person_count(&self) -> u64 {
        self.persons.value()
    }

    /// 已成功构造的学生数量
    pub fn student_count(&self) -> u64 {
        self.students.value()
    }

    /// 两个计数全部清零
    pub fn reset(&self) {
        self.persons.reset();
        self.students.reset();
    }
}
