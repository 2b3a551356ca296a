use std::sync::Arc;
use world_dns_domain::RecordType;

/// Lists every supported record type name, sorted and deduplicated.
pub struct ListRecordTypesUseCase {
    names: Arc<[&'static str]>,
}

impl ListRecordTypesUseCase {
    pub fn new() -> Self {
        Self {
            names: Arc::from(RecordType::sorted_names()),
        }
    }

    pub fn execute(&self) -> Arc<[&'static str]> {
        Arc::clone(&self.names)
    }
}

impl Default for ListRecordTypesUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_without_duplicates() {
        let names = ListRecordTypesUseCase::new().execute();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert!(names.contains(&"A"));
        assert!(names.contains(&"CNAME"));
        assert!(names.contains(&"HTTPS"));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let use_case = ListRecordTypesUseCase::new();
        assert_eq!(use_case.execute(), use_case.execute());
    }
}
