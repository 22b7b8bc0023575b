// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::{FrequencyMap, ResultOrdering};

/// 按指定方式排列词频结果
///
/// 结果缺失（作业尚未完成）时返回空映射
pub fn order_results(results: Option<&FrequencyMap>, ordering: ResultOrdering) -> FrequencyMap {
    let Some(results) = results else {
        return FrequencyMap::new();
    };

    let mut ordered = results.clone();
    match ordering {
        ResultOrdering::Unordered => {}
        ResultOrdering::Frequency => {
            ordered.sort_by(|word_a, count_a, word_b, count_b| {
                count_b.cmp(count_a).then_with(|| word_a.cmp(word_b))
            });
        }
        ResultOrdering::Alphabetical => ordered.sort_keys(),
    }
    ordered
}
