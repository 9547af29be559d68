/// Station identifier, unique within a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub(crate) i64);

impl StationId {
    /// Create a new station ID
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for StationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "station#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_id_from_integer() {
        let id: StationId = 7i64.into();
        assert_eq!(id, StationId::new(7));
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn test_station_id_display() {
        assert_eq!(StationId::new(-3).to_string(), "station#-3");
    }

    #[test]
    fn test_station_id_ordering() {
        let mut ids = vec![StationId::new(3), StationId::new(-1), StationId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![StationId::new(-1), StationId::new(2), StationId::new(3)]);
    }
}
