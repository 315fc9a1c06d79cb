#![no_main]
use acmatch::Matcher;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split input into patterns and query
    if data.len() < 2 {
        return;
    }

    let split_point = (data[0] as usize).clamp(1, data.len() - 1);
    let pattern_data = &data[1..split_point];
    let query_data = &data[split_point..];

    let (Ok(pattern_str), Ok(query)) = (
        std::str::from_utf8(pattern_data),
        std::str::from_utf8(query_data),
    ) else {
        return;
    };

    let mut matcher = Matcher::new();
    for pattern in pattern_str.split('\0').filter(|s| !s.is_empty()) {
        matcher.add_pattern(pattern).unwrap();
    }
    matcher.build();

    let strings = matcher.search(query).unwrap();
    let hits = matcher.search_indexed(query).unwrap();
    assert_eq!(strings.len(), hits.len());
    assert_eq!(matcher.is_match(query).unwrap(), !hits.is_empty());

    let chars: Vec<char> = query.chars().collect();
    for (s, hit) in strings.iter().zip(&hits) {
        assert_eq!(hit.extract(&chars).as_deref(), Some(s.as_str()));
    }
});
