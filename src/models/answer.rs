use serde::ser::{Serialize, SerializeMap, Serializer};

/// 用户的答案集合：题目 ID -> 选中的选项
///
/// 按首次作答的顺序保存（即题目顺序），序列化为 JSON 对象时键顺序与题目顺序一致
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    entries: Vec<(String, String)>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入答案，已存在则覆盖
    pub fn insert(&mut self, question_id: impl Into<String>, option: impl Into<String>) {
        let question_id = question_id.into();
        let option = option.into();

        match self.entries.iter_mut().find(|(id, _)| *id == question_id) {
            Some(entry) => entry.1 = option,
            None => self.entries.push((question_id, option)),
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| id == question_id)
            .map(|(_, option)| option.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = AnswerMap::new();
        for (id, option) in iter {
            map.insert(id, option);
        }
        map
    }
}

impl Serialize for AnswerMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, option) in &self.entries {
            map.serialize_entry(id, option)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_existing_key() {
        let mut answers = AnswerMap::new();
        answers.insert("cooking_time", "Быстро");
        answers.insert("cooking_time", "Долго");

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("cooking_time"), Some("Долго"));
    }

    #[test]
    fn test_serializes_in_question_order() {
        let answers: AnswerMap = [
            ("cooking_time", "Быстро"),
            ("meal_type", "Завтрак"),
            ("difficulty", "Легко"),
            ("preference", "Новое"),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(
            json,
            r#"{"cooking_time":"Быстро","meal_type":"Завтрак","difficulty":"Легко","preference":"Новое"}"#
        );
    }
}
