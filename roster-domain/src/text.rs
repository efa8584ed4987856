//! 文本小工具
//!

/// 首字母大写、其余小写（问候语的格式化约定）
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hi"), "Hi");
        assert_eq!(capitalize("HELLO"), "Hello");
        assert_eq!(capitalize("gOOd Day"), "Good day");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }
}
