// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::Arc;

/// 文档根节点的名称，直接挂在根节点下的文本以此名称参与判断
pub const DOCUMENT_NODE_NAME: &str = "[document]";

/// 默认的不可见标签集合
pub const INVISIBLE_TAGS: [&str; 6] = ["style", "script", "head", "title", "meta", DOCUMENT_NODE_NAME];

/// 没有结束标签的元素，不进入打开元素栈
const VOID_ELEMENTS: [&str; 15] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
    "source", "track", "wbr",
];

/// 文本提取器
///
/// 按源文档的嵌套关系解析 HTML（不做 HTML5 树构建的节点迁移），
/// 丢弃注释节点以及父元素属于不可见标签集合的文本节点，
/// 其余文本按空白切分为词语。词语不去重，也不做大小写归一。
#[derive(Debug, Clone)]
pub struct TextExtractor {
    invisible_tags: Arc<HashSet<String>>,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(INVISIBLE_TAGS)
    }
}

impl TextExtractor {
    /// 使用自定义的不可见标签集合创建提取器
    ///
    /// 传入空集合时所有文本节点都视为可见
    pub fn new<I, S>(invisible_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            invisible_tags: Arc::new(invisible_tags.into_iter().map(Into::into).collect()),
        }
    }

    /// 父节点名称为 `parent_name` 的文本是否可见
    pub fn is_visible(&self, parent_name: &str) -> bool {
        !self.invisible_tags.contains(parent_name)
    }

    /// 解析 HTML 文档
    pub fn parse(&self, html: &str) -> VisibleText {
        let input = BufferQueue::default();
        input.push_back(StrTendril::from_slice(html));

        let tokenizer = Tokenizer::new(TextNodeSink::default(), TokenizerOpts::default());
        let _ = tokenizer.feed(&input);
        tokenizer.end();

        VisibleText {
            nodes: tokenizer.sink.take_nodes(),
            invisible_tags: Arc::clone(&self.invisible_tags),
        }
    }
}

/// 一个文本节点及其直接父元素的名称
#[derive(Debug)]
struct TextNode {
    parent: String,
    text: String,
}

/// 词法单元接收器
///
/// 维护打开元素栈：结束标签弹出到最近的同名元素，没有匹配时忽略。
/// 相邻的字符单元合并为一个文本节点
#[derive(Default)]
struct TextNodeSink {
    open_elements: RefCell<Vec<String>>,
    pending_text: RefCell<String>,
    nodes: RefCell<Vec<TextNode>>,
}

impl TextNodeSink {
    fn flush_text(&self) {
        let text = std::mem::take(&mut *self.pending_text.borrow_mut());
        if text.is_empty() {
            return;
        }
        let parent = self
            .open_elements
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(|| DOCUMENT_NODE_NAME.to_string());
        self.nodes.borrow_mut().push(TextNode { parent, text });
    }

    fn open(&self, name: &str) {
        self.open_elements.borrow_mut().push(name.to_string());
    }

    fn close(&self, name: &str) {
        let mut open = self.open_elements.borrow_mut();
        if let Some(index) = open.iter().rposition(|open_name| open_name == name) {
            open.truncate(index);
        }
    }

    fn take_nodes(&self) -> Vec<TextNode> {
        self.flush_text();
        self.nodes.take()
    }
}

impl TokenSink for TextNodeSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) => {
                self.pending_text.borrow_mut().push_str(&text);
                TokenSinkResult::Continue
            }
            Token::TagToken(tag) => {
                self.flush_text();
                let name: &str = &tag.name;
                match tag.kind {
                    TagKind::StartTag => {
                        if tag.self_closing || VOID_ELEMENTS.contains(&name) {
                            return TokenSinkResult::Continue;
                        }
                        self.open(name);
                        match name {
                            "script" => TokenSinkResult::RawData(RawKind::ScriptData),
                            "style" => TokenSinkResult::RawData(RawKind::Rawtext),
                            "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
                            _ => TokenSinkResult::Continue,
                        }
                    }
                    TagKind::EndTag => {
                        self.close(name);
                        TokenSinkResult::Continue
                    }
                }
            }
            Token::CommentToken(_) | Token::DoctypeToken(_) | Token::EOFToken => {
                self.flush_text();
                TokenSinkResult::Continue
            }
            _ => TokenSinkResult::Continue,
        }
    }
}

/// 已解析的文档，按文档顺序产出可见文本
pub struct VisibleText {
    nodes: Vec<TextNode>,
    invisible_tags: Arc<HashSet<String>>,
}

impl VisibleText {
    /// 可见文本节点的内容，按文档顺序
    pub fn text_nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes
            .iter()
            .filter(move |node| !self.invisible_tags.contains(node.parent.as_str()))
            .map(|node| node.text.as_str())
    }

    /// 可见文本按空白切分后的词语序列
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.text_nodes().flat_map(str::split_whitespace)
    }
}
