use std::fmt;
use std::str::FromStr;

/// A named unit of the catalog: what it consumes (`cost`) and what it is
/// worth (`value`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
    cost: i64,
    value: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, cost: i64, value: i64) -> Item {
        Item {
            name: name.into(),
            cost,
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> i64 {
        self.cost
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', {}, {})", self.name, self.cost, self.value)
    }
}

/// Parses one catalog line of the form `name cost value`.
impl FromStr for Item {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let [name, cost, value] = fields[..] else {
            return Err(format!(
                "expected 3 fields (name cost value), found {}",
                fields.len()
            ));
        };
        let cost = cost
            .parse::<i64>()
            .map_err(|e| format!("invalid cost {:?}: {}", cost, e))?;
        let value = value
            .parse::<i64>()
            .map_err(|e| format!("invalid value {:?}: {}", value, e))?;
        Ok(Item::new(name, cost, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let item: Item = "sprinkler_07  9 2".parse().unwrap();
        assert_eq!(Item::new("sprinkler_07", 9, 2), item);
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!("sprinkler_07 9".parse::<Item>().is_err());
        assert!("sprinkler_07 9 2 1".parse::<Item>().is_err());
        assert!("sprinkler_07 nine 2".parse::<Item>().is_err());
        assert!("sprinkler_07 9 two".parse::<Item>().is_err());
    }

    #[test]
    fn test_display_matches_tuple_form() {
        assert_eq!("('a', 5, 3)", Item::new("a", 5, 3).to_string());
    }
}
