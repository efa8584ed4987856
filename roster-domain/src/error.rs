//! 领域层统一错误定义
//!
//! 本模型唯一的失败来源是出生日期校验；错误总是可由调用方就地恢复，
//! 构造与变更在失败时均保持事务性（状态与计数不变）。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
///
/// 原始实现的报错文案写的是上界（`<=`），与实际执行的下界校验相矛盾；
/// 此处以校验规则为准，文案修正为 `>=`（决策记录见 DESIGN.md）。
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid date of birth (year should be >= {min_year})")]
    InvalidDateOfBirth { year: i32, min_year: i32 },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
