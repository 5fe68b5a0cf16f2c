//! 表单校验模块
//!
//! 登录与订单表单共用的字段校验器。全部基于字符类手写，
//! 不引入 regex（WASM 体积敏感）。校验失败只阻止提交，
//! 由调用方负责展示行内错误信息。

/// 邮箱形如 `local@domain.tld`：恰好一个 `@`，各段非空且不含空白
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // 域名至少要有一个点，且点的前后非空
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

/// 手机号：恰好 9 位 ASCII 数字
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    value.len() == 9 && value.chars().all(|c| c.is_ascii_digit())
}

/// 姓名：非空，仅字母（含带重音的西语字母）与空格
pub fn is_valid_name(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// 不含任何空格
pub fn has_no_spaces(value: &str) -> bool {
    !value.contains(' ')
}

/// 去除首尾空白后非空
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 去除首尾空白后长度不低于 `min` 个字符
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_common_shapes() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+c@sub.dominio.pe"));
        assert!(is_valid_email("  con.espacios@fuera.com  "));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("sin-arroba.com"));
        assert!(!is_valid_email("@dominio.com"));
        assert!(!is_valid_email("ana@dominio"));
        assert!(!is_valid_email("ana@.com"));
        assert!(!is_valid_email("ana@dominio."));
        assert!(!is_valid_email("a na@dominio.com"));
        assert!(!is_valid_email("ana@@dominio.com"));
    }

    #[test]
    fn test_phone_requires_nine_digits() {
        assert!(is_valid_phone("987654321"));
        assert!(is_valid_phone(" 987654321 "));
        assert!(!is_valid_phone("98765432"));
        assert!(!is_valid_phone("9876543210"));
        assert!(!is_valid_phone("98765432a"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_name_allows_spanish_letters_and_spaces() {
        assert!(is_valid_name("María José"));
        assert!(is_valid_name("Ñoño"));
        assert!(!is_valid_name("Juan2"));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name("Pérez-García"));
    }

    #[test]
    fn test_filled_and_spaces_and_min_length() {
        assert!(is_filled("x"));
        assert!(!is_filled("   "));
        assert!(has_no_spaces("usuario"));
        assert!(!has_no_spaces("usu ario"));
        assert!(has_min_length("abc", 3));
        assert!(has_min_length("  abc  ", 3));
        assert!(!has_min_length("ab", 3));
    }
}
