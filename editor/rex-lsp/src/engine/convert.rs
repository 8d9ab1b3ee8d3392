//! Type conversions from plugin types to LSP types

use crate::plugins::{Completion, CompletionKind, ReplaceSpan};
use tower_lsp::lsp_types::{
    self, CompletionItem as LspCompletionItem, CompletionItemKind as LspCompletionItemKind,
    CompletionTextEdit, MarkupContent, MarkupKind, Position as LspPosition, Range as LspRange,
    TextEdit,
};

/// Convert plugin completion to LSP completion item
pub fn to_lsp_completion(item: &Completion) -> LspCompletionItem {
    LspCompletionItem {
        label: item.label.clone(),
        kind: Some(to_lsp_completion_kind(&item.kind)),
        detail: item.detail.clone(),
        documentation: item.documentation.as_ref().map(|doc| {
            lsp_types::Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: doc.clone(),
            })
        }),
        insert_text: Some(item.insert_text.clone()),
        // Tokens are literal text; `$` and `{n}` must not be treated as
        // snippet placeholders.
        insert_text_format: Some(lsp_types::InsertTextFormat::PLAIN_TEXT),
        insert_text_mode: None,
        text_edit: Some(CompletionTextEdit::Edit(TextEdit {
            range: to_lsp_range(&item.replace_span),
            new_text: item.insert_text.clone(),
        })),
        sort_text: Some(format!("{:05}", item.sort_priority)),
        filter_text: None,
        deprecated: Some(false),
        preselect: None,
        additional_text_edits: None,
        command: None,
        commit_characters: None,
        data: None,
        tags: None,
        label_details: None,
    }
}

/// Convert plugin completion kind to LSP completion kind
fn to_lsp_completion_kind(kind: &CompletionKind) -> LspCompletionItemKind {
    match kind {
        CompletionKind::Construct => LspCompletionItemKind::KEYWORD,
        CompletionKind::Reference => LspCompletionItemKind::VALUE,
    }
}

/// Convert plugin replace span to LSP range
pub fn to_lsp_range(span: &ReplaceSpan) -> LspRange {
    LspRange {
        start: LspPosition {
            line: span.start_line,
            character: span.start_col,
        },
        end: LspPosition {
            line: span.end_line,
            character: span.end_col,
        },
    }
}
