use crate::model::rule::RegionRule;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Region name to rule, kept in insertion order.
///
/// Serialized as a plain JSON object whose keys appear in the order the rules
/// were inserted, so exported documents list states (and cities) in form order.
/// Inserting a name that is already present replaces its rule in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleMap {
    entries: Vec<(String, RegionRule)>,
}

impl RuleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, rule: RegionRule) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = rule,
            None => self.entries.push((name, rule)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&RegionRule> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, rule)| rule)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionRule)> {
        self.entries.iter().map(|(key, rule)| (key.as_str(), rule))
    }
}

impl FromIterator<(String, RegionRule)> for RuleMap {
    fn from_iter<I: IntoIterator<Item = (String, RegionRule)>>(iter: I) -> Self {
        let mut map = RuleMap::new();
        for (name, rule) in iter {
            map.insert(name, rule);
        }
        map
    }
}

impl Serialize for RuleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, rule) in &self.entries {
            map.serialize_entry(name, rule)?;
        }
        map.end()
    }
}

struct RuleMapVisitor;

impl<'de> Visitor<'de> for RuleMapVisitor {
    type Value = RuleMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of region names to tax rules")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RuleMap, A::Error> {
        let mut map = RuleMap::new();
        while let Some((name, rule)) = access.next_entry::<String, RegionRule>()? {
            map.insert(name, rule);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for RuleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RuleMapVisitor)
    }
}
