//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 计算从 `from` 到 `to` 经过的整年数
///
/// 年龄计算共用本公式：先取年份差，若 `to` 的（月, 日）早于
/// `from` 的（月, 日）则减一；周年当天即进位，不存在差一问题。
///
/// # 示例
///
/// ```
/// use chrono::NaiveDate;
/// use roster_domain::value_object::years_between;
///
/// let born = NaiveDate::from_ymd_opt(1995, 12, 25).unwrap();
///
/// let anniversary = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// assert_eq!(years_between(born, anniversary), 30);
///
/// let day_before = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
/// assert_eq!(years_between(born, day_before), 29);
/// ```
pub fn years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// 本地日历意义下的“今天”
pub(crate) fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// 出生日期（带下界校验的日历日期）
///
/// 唯一的构造路径会执行校验：年份必须不早于 [`BirthDate::MIN_YEAR`]；
/// 反序列化同样经由 `TryFrom` 重新校验，越界值无法绕过不变量。
/// 自身的比较语义是普通的时间先后（倒序的自然顺序属于实体，不属于日期）。
///
/// # 示例
///
/// ```
/// use chrono::NaiveDate;
/// use roster_domain::value_object::BirthDate;
///
/// let date = NaiveDate::from_ymd_opt(1986, 1, 13).unwrap();
/// let birth = BirthDate::new(date).unwrap();
/// assert_eq!(birth.year(), 1986);
/// assert_eq!(birth.to_string(), "1986-01-13");
///
/// let too_early = NaiveDate::from_ymd_opt(1887, 1, 13).unwrap();
/// assert!(BirthDate::new(too_early).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// 可接受的最早出生年份
    pub const MIN_YEAR: i32 = 1900;

    /// 创建出生日期；校验失败返回 [`DomainError::InvalidDateOfBirth`]
    pub fn new(date: NaiveDate) -> DomainResult<Self> {
        let birth = Self(date);
        birth.validate()?;
        Ok(birth)
    }

    /// 获取内部日历日期
    pub const fn value(&self) -> NaiveDate {
        self.0
    }

    /// 出生年份
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 截至 `on` 当日的整年年龄
    ///
    /// # 示例
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use roster_domain::value_object::BirthDate;
    ///
    /// let born = NaiveDate::from_ymd_opt(2001, 6, 24).unwrap();
    /// let birth = BirthDate::new(born).unwrap();
    ///
    /// let anniversary = NaiveDate::from_ymd_opt(2026, 6, 24).unwrap();
    /// assert_eq!(birth.age_at(anniversary), 25);
    /// ```
    pub fn age_at(&self, on: NaiveDate) -> i32 {
        years_between(self.0, on)
    }
}

impl ValueObject for BirthDate {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0.year() < Self::MIN_YEAR {
            return Err(DomainError::InvalidDateOfBirth {
                year: self.0.year(),
                min_year: Self::MIN_YEAR,
            });
        }
        Ok(())
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<NaiveDate> for BirthDate {
    type Error = DomainError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(birth: BirthDate) -> Self {
        birth.value()
    }
}
