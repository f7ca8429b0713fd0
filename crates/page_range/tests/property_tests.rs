#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use page_range::{PageToken, PaginationRequest, compute, page_numbers};
use proptest::prelude::*;

/// Valid `(current, total, siblings)` triples, including current pages
/// outside `1..=total` that the calculator must clamp.
fn request() -> impl Strategy<Value = (i64, i64, i64)> {
    (1i64..5000, 0i64..12).prop_flat_map(|(total, siblings)| {
        let current = -5i64..=total + 5;
        (current, Just(total), Just(siblings))
    })
}

// =============================================================================
// Ordering and bounds
// =============================================================================

proptest! {
    #[test]
    fn pages_strictly_increasing_and_in_bounds((current, total, siblings) in request()) {
        let tokens = compute(current, total, siblings).unwrap();
        let pages: Vec<usize> = page_numbers(&tokens).collect();

        for pair in pages.windows(2) {
            prop_assert!(pair[0] < pair[1], "not increasing: {:?}", tokens);
        }
        for &page in &pages {
            prop_assert!(page >= 1 && page <= total as usize);
        }
    }

    #[test]
    fn first_last_and_current_always_present((current, total, siblings) in request()) {
        let request = PaginationRequest::new(current, total, siblings).unwrap();
        let tokens = request.tokens();

        prop_assert_eq!(tokens.first(), Some(&PageToken::Page(1)));
        prop_assert_eq!(tokens.last(), Some(&PageToken::Page(total as usize)));
        prop_assert!(tokens.contains(&PageToken::Page(request.current_page())));
    }

    #[test]
    fn siblings_within_range_are_present((current, total, siblings) in request()) {
        let request = PaginationRequest::new(current, total, siblings).unwrap();
        let tokens = request.tokens();
        let c = request.current_page() as i64;

        for page in (c - siblings)..=(c + siblings) {
            if page >= 1 && page <= total {
                prop_assert!(
                    tokens.contains(&PageToken::Page(page as usize)),
                    "missing sibling {} in {:?}", page, tokens
                );
            }
        }
    }
}

// =============================================================================
// Ellipsis placement
// =============================================================================

proptest! {
    #[test]
    fn no_adjacent_ellipses((current, total, siblings) in request()) {
        let tokens = compute(current, total, siblings).unwrap();
        for pair in tokens.windows(2) {
            prop_assert!(!(pair[0].is_ellipsis() && pair[1].is_ellipsis()));
        }
    }

    #[test]
    fn ellipsis_hides_at_least_two_pages((current, total, siblings) in request()) {
        let tokens = compute(current, total, siblings).unwrap();
        for (i, token) in tokens.iter().enumerate() {
            if token.is_ellipsis() {
                prop_assert!(i > 0 && i + 1 < tokens.len(), "edge ellipsis: {:?}", tokens);
                let before = tokens[i - 1].page().unwrap();
                let after = tokens[i + 1].page().unwrap();
                let hidden = after - before - 1;
                prop_assert!(hidden >= 2, "ellipsis hides {} pages", hidden);
            }
        }
    }

    #[test]
    fn adjacent_pages_are_consecutive((current, total, siblings) in request()) {
        let tokens = compute(current, total, siblings).unwrap();
        for pair in tokens.windows(2) {
            if let (PageToken::Page(a), PageToken::Page(b)) = (pair[0], pair[1]) {
                prop_assert_eq!(b, a + 1, "gap between {} and {} has no ellipsis", a, b);
            }
        }
    }
}

// =============================================================================
// Size and determinism
// =============================================================================

proptest! {
    #[test]
    fn length_is_bounded((current, total, siblings) in request()) {
        let tokens = compute(current, total, siblings).unwrap();
        prop_assert!(tokens.len() <= 2 * siblings as usize + 5);
    }

    #[test]
    fn length_independent_of_total(
        siblings in 0usize..8,
        total in 1_000_000usize..usize::MAX / 2,
        offset in 0usize..1000,
    ) {
        let current = total / 2 + offset;
        let tokens = PaginationRequest::from_parts(current, total, siblings).tokens();
        prop_assert_eq!(tokens.len(), 2 * siblings + 5);
    }

    #[test]
    fn identical_inputs_identical_output((current, total, siblings) in request()) {
        prop_assert_eq!(
            compute(current, total, siblings).unwrap(),
            compute(current, total, siblings).unwrap()
        );
    }

    #[test]
    fn small_totals_show_every_page(
        total in 1usize..6,
        current in 1usize..6,
        siblings in 0usize..4,
    ) {
        let tokens = PaginationRequest::from_parts(current, total, siblings).tokens();
        // At most one hidden page per side, which is shown explicitly.
        if total <= siblings + 3 {
            let pages: Vec<usize> = page_numbers(&tokens).collect();
            prop_assert_eq!(pages, (1..=total).collect::<Vec<_>>());
            prop_assert!(!tokens.iter().any(PageToken::is_ellipsis));
        }
    }

    #[test]
    fn negative_inputs_always_rejected(
        current in -100i64..100,
        total in -1000i64..-1,
        siblings in -50i64..-1,
    ) {
        prop_assert!(compute(current, total, 1).is_err());
        prop_assert!(compute(current, 10, siblings).is_err());
    }
}
