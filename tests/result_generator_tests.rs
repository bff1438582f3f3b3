use std::sync::Arc;

use rose::error::RoseError;
use rose::result_generator::*;

mod test_helpers {
    use super::*;

    pub fn fixed_generator() -> ResultGenerator {
        ResultGenerator::new(Arc::new(FixedSearchTimer(0.2)))
    }

    pub fn expected_len(total: u64, page: u64, page_size: u64) -> usize {
        let start = (page - 1) * page_size;
        total.saturating_sub(start).min(page_size) as usize
    }
}

use test_helpers::*;

#[cfg(test)]
mod totals {
    use super::*;

    #[test]
    fn test_cat_total() {
        let response = fixed_generator().generate("cat", 1, 10).unwrap();
        assert_eq!(response.total_results, 507);
    }

    #[test]
    fn test_total_matches_formula() {
        for query in ["a", "cat", "Rust", "hello world", "zebra crossing", "~", "Ünïcödé"] {
            let len = query.chars().count() as u64;
            let first = query.chars().next().unwrap() as u64;
            let response = fixed_generator().generate(query, 1, 10).unwrap();
            assert_eq!(response.total_results, len * 70 + len * first, "query {query:?}");
        }
    }

    #[test]
    fn test_total_is_stable() {
        let generator = fixed_generator();
        let first = generator.generate("stable", 1, 10).unwrap().total_results;
        for _ in 0..5 {
            assert_eq!(generator.generate("stable", 1, 10).unwrap().total_results, first);
        }
    }

    #[test]
    fn test_empty_query_has_no_results() {
        let generator = fixed_generator();
        for page in [1, 2, 100] {
            let response = generator.generate("", page, 10).unwrap();
            assert_eq!(response.total_results, 0);
            assert!(response.results.is_empty());
        }
    }

    #[test]
    fn test_huge_query_does_not_overflow() {
        let query = "\u{10FFFF}".repeat(10_000);
        let response = fixed_generator().generate(&query, 1, 3).unwrap();
        assert_eq!(response.total_results, 10_000 * 70 + 10_000 * 0x10FFFF);
        assert_eq!(response.results.len(), 3);
    }
}

#[cfg(test)]
mod slicing {
    use super::*;

    #[test]
    fn test_first_page_of_cat() {
        let response = fixed_generator().generate("cat", 1, 10).unwrap();
        assert_eq!(response.results.len(), 10);
        let first = &response.results[0];
        assert_eq!(first.id, "result-0");
        assert_eq!(first.title, "Cat - Result 1");
        assert_eq!(first.url, "https://example.com/result-1");
        assert_eq!(
            first.description,
            "This is a sample search result for \"cat\". It provides information about topic 1 related to your search. Click to learn more about this interesting topic."
        );
        assert_eq!(response.results[9].id, "result-9");
    }

    #[test]
    fn test_last_partial_page_of_cat() {
        let response = fixed_generator().generate("cat", 51, 10).unwrap();
        let ids: Vec<&str> = response.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "result-500",
                "result-501",
                "result-502",
                "result-503",
                "result-504",
                "result-505",
                "result-506"
            ]
        );
        assert_eq!(response.results[6].title, "Cat - Result 507");
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let response = fixed_generator().generate("cat", 52, 10).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total_results, 507);

        let response = fixed_generator().generate("cat", u64::MAX, u64::MAX).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_slice_length_matches_formula() {
        let generator = fixed_generator();
        let total = total_results("dog");
        for page_size in [1, 3, 7, 10, 25, 100, 1000] {
            for page in [1, 2, 5, 10, 50, 100] {
                let response = generator.generate("dog", page, page_size).unwrap();
                assert_eq!(
                    response.results.len(),
                    expected_len(total, page, page_size),
                    "page {page}, page_size {page_size}"
                );
                assert!(response.results.len() as u64 <= page_size);
            }
        }
    }

    #[test]
    fn test_ids_are_unique_and_contiguous() {
        let response = fixed_generator().generate("owl", 3, 20).unwrap();
        for (offset, record) in response.results.iter().enumerate() {
            assert_eq!(record.id, format!("result-{}", 40 + offset));
            assert_eq!(record.url, format!("https://example.com/result-{}", 41 + offset));
        }
    }

    #[test]
    fn test_title_only_capitalizes_first_letter() {
        let response = fixed_generator().generate("new york", 1, 1).unwrap();
        assert_eq!(response.results[0].title, "New york - Result 1");
    }

    #[test]
    fn test_same_input_same_output() {
        let a = ResultGenerator::default().generate("repeat", 2, 10).unwrap();
        let b = ResultGenerator::default().generate("repeat", 2, 10).unwrap();
        assert_eq!(a.results, b.results);
        assert_eq!(a.total_results, b.total_results);
    }
}

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn test_zero_page_rejected() {
        let err = fixed_generator().generate("cat", 0, 10).unwrap_err();
        assert!(matches!(err, RoseError::InvalidArgument(_)));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = fixed_generator().generate("cat", 1, 0).unwrap_err();
        assert!(matches!(err, RoseError::InvalidArgument(_)));
    }

    #[test]
    fn test_validation_happens_before_empty_query_check() {
        assert!(fixed_generator().generate("", 0, 10).is_err());
    }
}

#[cfg(test)]
mod search_time {
    use super::*;

    #[test]
    fn test_random_timer_in_range() {
        let generator = ResultGenerator::default();
        for _ in 0..500 {
            let t = generator.generate("cat", 1, 10).unwrap().search_time;
            assert!(SEARCH_TIME_RANGE.contains(&t), "{t} out of range");
        }
    }

    #[test]
    fn test_injected_timer_is_used() {
        let generator = ResultGenerator::new(Arc::new(FixedSearchTimer(0.33)));
        assert_eq!(generator.generate("cat", 1, 10).unwrap().search_time, 0.33);
    }

    #[test]
    fn test_custom_timer() {
        struct Counting(std::sync::atomic::AtomicU64);
        impl SearchTimer for Counting {
            fn search_time(&self) -> f64 {
                let n = self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                0.1 + (n % 3) as f64 * 0.1
            }
        }
        let timer = Arc::new(Counting(Default::default()));
        let generator = ResultGenerator::new(timer.clone());
        generator.generate("cat", 1, 10).unwrap();
        generator.generate("", 1, 10).unwrap();
        assert_eq!(timer.0.load(std::sync::atomic::Ordering::SeqCst), 2);
    }
}
