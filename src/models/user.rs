use serde::{Deserialize, Serialize};

/// 一条用户记录
///
/// 由表单校验通过的输入生成，或从 `GET /api/user` 的响应中解析得到
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    #[serde(deserialize_with = "deserialize_age")]
    pub age: u32,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// 页面上展示的用户列表
///
/// 保持插入顺序，不去重，除位置外没有其他标识
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserList {
    users: Vec<UserRecord>,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用服务端返回的完整列表替换当前内容
    pub fn replace(&mut self, users: Vec<UserRecord>) {
        self.users = users;
    }

    /// 追加一条记录到末尾
    pub fn append(&mut self, user: UserRecord) {
        self.users.push(user);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.users.iter()
    }

    pub fn as_slice(&self) -> &[UserRecord] {
        &self.users
    }
}

impl From<Vec<UserRecord>> for UserList {
    fn from(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}

impl<'a> IntoIterator for &'a UserList {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.iter()
    }
}

// 服务端存的 age 不一定是整数类型，这里兼容整数、整值浮点数和数字字符串
fn deserialize_age<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct AgeVisitor;

    impl<'de> Visitor<'de> for AgeVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a positive whole number or a numeric string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            u32::try_from(value).map_err(|_| E::custom(format!("age {} out of range", value)))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            u32::try_from(value).map_err(|_| E::custom(format!("age {} out of range", value)))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX) {
                Ok(value as u32)
            } else {
                Err(E::custom(format!("age {} is not a whole number", value)))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            value
                .trim()
                .parse::<u32>()
                .map_err(|_| E::custom(format!("age '{}' is not a number", value)))
        }
    }

    deserializer.deserialize_any(AgeVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_to_wire_shape() {
        let user = UserRecord::new("Alice", 30);
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"name": "Alice", "age": 30})
        );
    }

    #[test]
    fn test_deserialize_lenient_age() {
        let users: Vec<UserRecord> = serde_json::from_value(json!([
            {"name": "Bob", "age": 25},
            {"name": "Carol", "age": 41.0},
            {"name": "Dave", "age": "19"},
        ]))
        .unwrap();

        let ages: Vec<u32> = users.iter().map(|u| u.age).collect();
        assert_eq!(ages, vec![25, 41, 19]);
    }

    #[test]
    fn test_deserialize_rejects_fractional_age() {
        let result: Result<UserRecord, _> =
            serde_json::from_value(json!({"name": "Eve", "age": 3.5}));
        assert!(result.is_err());
    }

    #[test]
    fn test_user_list_preserves_order_and_duplicates() {
        let mut list = UserList::new();
        assert!(list.is_empty());

        list.replace(vec![UserRecord::new("Bob", 25)]);
        list.append(UserRecord::new("Alice", 30));
        list.append(UserRecord::new("Alice", 30));

        let names: Vec<&str> = list.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Alice", "Alice"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_replace_discards_previous_entries() {
        let mut list = UserList::from(vec![UserRecord::new("Old", 1)]);
        list.replace(Vec::new());
        assert!(list.is_empty());
    }
}
