use crate::validation::FieldErrors;

/// 表单原始输入
///
/// 两个字段都以文本形式到达；`age` 为 `None` 表示该字段从未填写
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub age: Option<String>,
}

impl FormInput {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: Some(age.into()),
        }
    }
}

/// 表单编辑状态：当前输入 + 每个字段的校验错误
///
/// 提交成功后不清空输入
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub input: FormInput,
    pub errors: FieldErrors,
}

impl FormState {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
