//! 统一能力接口（Individual）
//!
//! 以 trait 取代隐式继承：基础记录与其特化实现同一能力面，
//! 问候与长格式表示通过动态分发解析到具体变体；
//! 短格式作为缺省实现由双方共享，特化不单独覆写。
//!
use std::cmp::Ordering;

use crate::value_object::{BirthDate, local_today};

/// 人员能力抽象：命名、出生日期、问候与文本表示
pub trait Individual {
    /// 姓名
    fn name(&self) -> &str;

    /// 出生日期
    fn date_of_birth(&self) -> BirthDate;

    /// 当前整年年龄（派生值，查询时即时计算）
    fn age(&self) -> i32 {
        self.date_of_birth().age_at(local_today())
    }

    /// 渲染问候文本并返回；打印与否由调用方决定
    fn greeting(&self, salutation: &str) -> String;

    /// 短格式表示：`<name='..' date_of_birth='..'>`
    fn summary(&self) -> String {
        format!(
            "<name='{}' date_of_birth='{}'>",
            self.name(),
            self.date_of_birth()
        )
    }

    /// 长格式表示：在短格式字段基础上额外标注具体变体类型名
    fn describe(&self) -> String;
}

/// 自然顺序比较器：按出生日期倒序（越年轻越“小”）
///
/// 供混合存放基础与特化实体的集合使用（`sort_by`）。
pub fn natural_order(a: &dyn Individual, b: &dyn Individual) -> Ordering {
    b.date_of_birth().cmp(&a.date_of_birth())
}
