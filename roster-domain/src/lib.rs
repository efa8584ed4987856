//! 人员领域模型基础库（roster-domain）
//!
//! 提供一个以校验不变量为中心的最小人员模型，用于在应用中实现：
//! - 基础人员记录（`person`）与其一级特化（`student`）建模
//! - 出生日期值对象（`value_object`）：构造与每次变更统一校验
//! - 统一能力接口（`individual`）：问候、文本表示与自然排序
//! - 实例登记（`registry`）：按变体独立计数的显式上下文
//!
//! 本 crate 保持纯内存、单线程与同步语义，不包含任何 I/O 与持久化；
//! 控制台输出等表现层职责由调用方承担（参见工作区内的 `demo`）。
//!
//! 典型用法：
//! 1. 创建 `Registry` 并在构造实体时以引用注入；
//! 2. 通过 `Person::builder()` / `Student::builder()` 构造实体；
//! 3. 通过 `Individual` 以统一方式问候、呈现与排序混合集合。
//!
pub mod error;
pub mod individual;
pub mod person;
pub mod registry;
pub mod student;
pub mod text;
pub mod value_object;
