//! 表单校验
//!
//! 校验规则是一张显式的表：字段 → 有序的（判定函数, 错误）列表。
//! 每个字段只报告第一条违反的规则；校验是纯函数，不会因为非法输入而 panic。

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{FormInput, UserRecord};

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Age,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 字段级校验错误，`Display` 即展示给用户的提示文本
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Age must be a number")]
    AgeNotANumber,
    #[error("Age is required")]
    AgeRequired,
    #[error("Age must be positive")]
    AgeNotPositive,
    #[error("Age must be an integer")]
    AgeNotInteger,
    #[error("Age is out of range")]
    AgeOutOfRange,
}

/// 字段 → 第一条错误
pub type FieldErrors = BTreeMap<Field, ValidationError>;

/// 一条规则：`violated` 返回 true 时报告 `error`
struct Rule {
    violated: fn(Option<&str>) -> bool,
    error: ValidationError,
}

const NAME_RULES: &[Rule] = &[Rule {
    violated: is_empty,
    error: ValidationError::NameRequired,
}];

// 顺序固定：类型 → 必填 → 正数 → 整数 → 范围
const AGE_RULES: &[Rule] = &[
    Rule {
        violated: is_not_a_number,
        error: ValidationError::AgeNotANumber,
    },
    Rule {
        violated: is_absent,
        error: ValidationError::AgeRequired,
    },
    Rule {
        violated: is_not_positive,
        error: ValidationError::AgeNotPositive,
    },
    Rule {
        violated: is_not_integer,
        error: ValidationError::AgeNotInteger,
    },
    Rule {
        violated: is_out_of_range,
        error: ValidationError::AgeOutOfRange,
    },
];

const SCHEMA: &[(Field, &[Rule])] = &[(Field::Name, NAME_RULES), (Field::Age, AGE_RULES)];

/// 校验表单输入
///
/// # 返回
/// 通过时返回转换后的 `UserRecord`，否则返回每个字段的第一条错误
pub fn validate(input: &FormInput) -> Result<UserRecord, FieldErrors> {
    let errors: FieldErrors = SCHEMA
        .iter()
        .filter_map(|(field, rules)| {
            first_violation(rules, field_value(input, *field)).map(|error| (*field, error))
        })
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    match input.age.as_deref().and_then(parse_number) {
        Some(age) => Ok(UserRecord::new(input.name.clone(), age as u32)),
        // 规则表已经保证 age 可解析，走到这里说明规则表被改坏了
        None => Err(FieldErrors::from([(Field::Age, ValidationError::AgeRequired)])),
    }
}

fn field_value(input: &FormInput, field: Field) -> Option<&str> {
    match field {
        Field::Name => Some(input.name.as_str()),
        Field::Age => input.age.as_deref(),
    }
}

fn first_violation(rules: &[Rule], value: Option<&str>) -> Option<ValidationError> {
    rules
        .iter()
        .find(|rule| (rule.violated)(value))
        .map(|rule| rule.error)
}

/// 去掉所有空白后按十进制浮点数解析
///
/// 只有 NaN 不算数字；无穷大交给后面的正数 / 整数规则处理
fn parse_number(raw: &str) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    compact.parse::<f64>().ok().filter(|v| !v.is_nan())
}

// 姓名只拒绝空串，纯空白的姓名照常接受
fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

fn is_absent(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn is_not_a_number(value: Option<&str>) -> bool {
    match value {
        Some(raw) if !is_absent(value) => parse_number(raw).is_none(),
        _ => false,
    }
}

fn is_not_positive(value: Option<&str>) -> bool {
    value.and_then(parse_number).map_or(false, |v| v <= 0.0)
}

fn is_not_integer(value: Option<&str>) -> bool {
    value.and_then(parse_number).map_or(false, |v| v.fract() != 0.0)
}

fn is_out_of_range(value: Option<&str>) -> bool {
    value
        .and_then(parse_number)
        .map_or(false, |v| v > f64::from(u32::MAX))
}
