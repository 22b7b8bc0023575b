// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::FrequencyMap;

/// 统计每个词语的出现次数
///
/// 结果按词语首次出现的顺序排列；空输入返回空映射
pub fn count_word_frequencies<I, S>(words: I) -> FrequencyMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut frequencies = FrequencyMap::new();
    for word in words {
        let word = word.as_ref();
        match frequencies.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                frequencies.insert(word.to_owned(), 1);
            }
        }
    }
    frequencies
}
