// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

// Unicode-aware: matches any `Nd` character, not only ASCII 0-9
static DIGIT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d").expect("digit pattern is a valid regex"));

/// 词语过滤器特质
///
/// 基于谓词的过滤器，`keep` 返回 false 的词语会被丢弃
pub trait TokenFilter: Send + Sync {
    /// 是否保留该词语
    fn keep(&self, token: &str) -> bool;

    /// 过滤器名称
    fn name(&self) -> &'static str;
}

/// 丢弃包含十进制数字字符的词语
#[derive(Debug, Default, Clone, Copy)]
pub struct DigitFilter;

impl DigitFilter {
    /// 词语是否包含数字
    pub fn contains_digits(token: &str) -> bool {
        DIGIT_PATTERN.is_match(token)
    }
}

impl TokenFilter for DigitFilter {
    fn keep(&self, token: &str) -> bool {
        !Self::contains_digits(token)
    }

    fn name(&self) -> &'static str {
        "digits"
    }
}

/// 可在配置中引用的过滤器类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenFilterKind {
    /// 见 [`DigitFilter`]
    Digits,
}

impl TokenFilterKind {
    /// 构建对应的过滤器实例
    pub fn build(self) -> Box<dyn TokenFilter> {
        match self {
            TokenFilterKind::Digits => Box::new(DigitFilter),
        }
    }
}

/// 有序过滤链
///
/// 词语需要通过链上的每一个过滤器才会被保留；空链保留全部词语
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn TokenFilter>>,
}

impl FilterChain {
    /// 使用给定的过滤器创建过滤链
    pub fn new(filters: Vec<Box<dyn TokenFilter>>) -> Self {
        Self { filters }
    }

    /// 默认过滤链：仅包含数字过滤器
    pub fn with_default_filters() -> Self {
        Self::new(vec![Box::new(DigitFilter)])
    }

    /// 根据配置构建过滤链
    pub fn from_kinds(kinds: &[TokenFilterKind]) -> Self {
        Self::new(kinds.iter().map(|kind| kind.build()).collect())
    }

    /// 追加一个过滤器
    pub fn push(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// 词语是否通过整条过滤链
    pub fn keep(&self, token: &str) -> bool {
        self.filters.iter().all(|filter| filter.keep(token))
    }

    /// 过滤链中各过滤器的名称
    pub fn names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
