/// A unit of work on the assembly line with a fixed processing cost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    processing_time: i64,
    is_active: bool,
}

impl Station {
    /// Create a new, inactive station
    pub(crate) fn new(processing_time: i64) -> Self {
        Self {
            processing_time,
            is_active: false,
        }
    }

    pub fn processing_time(&self) -> i64 {
        self.processing_time
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Set the activity flag, returning whether it changed
    pub(crate) fn set_active(&mut self, active: bool) -> bool {
        let changed = self.is_active != active;
        self.is_active = active;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_station_is_inactive() {
        let station = Station::new(12);
        assert_eq!(station.processing_time(), 12);
        assert!(!station.is_active());
    }

    #[test]
    fn test_set_active_reports_change() {
        let mut station = Station::new(1);
        assert!(station.set_active(true));
        assert!(!station.set_active(true));
        assert!(station.is_active());
        assert!(station.set_active(false));
        assert!(!station.is_active());
    }
}
