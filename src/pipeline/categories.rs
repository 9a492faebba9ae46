//! Top-K frequency counting for categorical columns

use std::collections::HashMap;

use anyhow::Result;
use polars::prelude::*;

/// Count the most frequent values of a non-numeric column.
///
/// Values are coerced to text and trimmed; blanks and nulls are dropped.
/// Ties are broken by first-encountered order, matching the loader's row
/// order. Returns an empty vector when nothing survives the filtering, in
/// which case the caller skips the column.
pub fn top_categories(col: &Column, top_k: usize) -> Result<Vec<(String, u32)>> {
    let casted = col.cast(&DataType::String)?;
    let ca = casted.str()?;

    // Insertion order doubles as the tie-break key
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for value in ca.into_iter().flatten() {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        match counts.get_mut(trimmed) {
            Some(count) => *count += 1,
            None => {
                order.push(trimmed.to_string());
                counts.insert(trimmed.to_string(), 1);
            }
        }
    }

    let mut ranked: Vec<(String, u32)> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();

    // Stable sort keeps first-encountered order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_k);

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_trimmed_values_and_drops_blanks() {
        let col = Column::new(
            "c".into(),
            vec!["x", " x ", "y", "", "   ", "z", "y", "x"],
        );

        let ranked = top_categories(&col, 20).unwrap();

        assert_eq!(ranked[0], ("x".to_string(), 3));
        assert_eq!(ranked[1], ("y".to_string(), 2));
        assert_eq!(ranked[2], ("z".to_string(), 1));
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let col = Column::new("c".into(), vec!["beta", "alpha", "beta", "alpha", "gamma"]);

        let ranked = top_categories(&col, 20).unwrap();

        assert_eq!(ranked[0].0, "beta");
        assert_eq!(ranked[1].0, "alpha");
        assert_eq!(ranked[2].0, "gamma");
    }

    #[test]
    fn truncates_to_top_k() {
        let values: Vec<String> = (0..30).map(|i| format!("v{}", i)).collect();
        let col = Column::new("c".into(), values);

        let ranked = top_categories(&col, 20).unwrap();

        assert_eq!(ranked.len(), 20);
    }

    #[test]
    fn all_blank_column_is_empty() {
        let col = Column::new("c".into(), vec!["", "  ", "\t"]);

        let ranked = top_categories(&col, 20).unwrap();

        assert!(ranked.is_empty());
    }
}
