//! `serde` support: lists serialize as sequences, dicts as maps.
//!
//! `ScList` derives its impls (see `list.rs`); the types here need custom ones.

use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{dict::ScDict, frozen_list::ScFrozenList};

impl<T: Serialize> Serialize for ScFrozenList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ScFrozenList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(ScFrozenList::from_vec)
    }
}

impl<K: Serialize, V: Serialize> Serialize for ScDict<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.as_map())
    }
}

impl<'de, K, V> Deserialize<'de> for ScDict<K, V>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ahash::HashMap::<K, V>::deserialize(deserializer).map(ScDict::from_map)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ScDict, ScFrozenList, ScIterable, ScList, ScSeq};

    #[test]
    fn test_list_as_json_array() {
        let list = ScList::from(vec![1, 2, 3]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: ScList<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn test_frozen_list_slice_serializes_view_only() {
        let list = ScFrozenList::from([1, 2, 3, 4]).slice(1..3);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[2,3]");
        let back: ScFrozenList<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn test_group_by_as_json_object() {
        let groups = ScSeq::new(["ant", "bee", "asp"]).group_by(|s| s[..1].to_string());
        let json = serde_json::to_value(&groups).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "a": ["ant", "asp"], "b": ["bee"] })
        );
        let back: ScDict<String, ScList<String>> = serde_json::from_value(json).unwrap();
        assert_eq!(back.get("a").unwrap().as_slice(), &["ant", "asp"]);
    }

    #[test]
    fn test_dict_from_json_object() {
        let d: ScDict<String, u32> =
            serde_json::from_str(r#"{"apple": 3, "pear": 5}"#).unwrap();
        assert_eq!(
            d,
            ScDict::from([("apple".to_string(), 3), ("pear".to_string(), 5)])
        );
        assert!(serde_json::from_str::<ScDict<String, u32>>(r#"{"apple": "x"}"#).is_err());
    }

    #[test]
    fn test_nested_lists_are_transparent() {
        let nested = ScList::from(vec![ScList::from(vec![1]), ScList::new()]);
        assert_eq!(serde_json::to_string(&nested).unwrap(), "[[1],[]]");
    }
}
