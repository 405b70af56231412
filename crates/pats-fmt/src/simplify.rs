//! Rewrite rules that render common term shapes in compact surface syntax.
//!
//! Rules are tried in table order and the first one that recognizes a term
//! wins. Several rules overlap structurally, so the order is significant.

use pats_common::term::{Term, TermKind, Terminator};
use pats_common::token::{is_integer, is_symbol_char};

use crate::ir::{close, open, operator, separator, token, Word};
use crate::printer::FormatConfig;
use crate::walker::{bare_words, term_words};

/// A named shape-matching rewrite.
pub(crate) struct Rule {
    pub name: &'static str,
    pub rewrite: fn(&Term, usize, &FormatConfig) -> Option<Vec<Word>>,
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "int-literal-wrapper",
        rewrite: int_literal_wrapper,
    },
    Rule {
        name: "constant-ref",
        rewrite: constant_ref,
    },
    Rule {
        name: "var-wrapper",
        rewrite: var_wrapper,
    },
    Rule {
        name: "binary-app",
        rewrite: binary_app,
    },
    Rule {
        name: "eq-eq",
        rewrite: eq_eq,
    },
    Rule {
        name: "mode-wrapper",
        rewrite: mode_wrapper,
    },
    Rule {
        name: "indexed-name",
        rewrite: indexed_name,
    },
];

/// Words for the first rule that recognizes `term`, if any.
pub(crate) fn simplify(term: &Term, level: usize, config: &FormatConfig) -> Option<Vec<Word>> {
    RULES.iter().find_map(|rule| {
        let words = (rule.rewrite)(term, level, config)?;
        tracing::trace!(rule = rule.name, token = %term.token, level, "simplified term");
        Some(words)
    })
}

/// Builtin integer functions shown as infix operators.
fn operator_alias(name: &str) -> Option<&'static str> {
    match name {
        "mul_int_int" => Some("*"),
        "add_int_int" => Some("+"),
        "sub_int_int" => Some("*"),
        _ => None,
    }
}

/// A bare integer such as the `12` in `n(12)`.
fn is_stamp(term: &Term) -> bool {
    term.is_bare() && is_integer(&term.token)
}

/// `S2Eintinf(1)` --> `1`
fn int_literal_wrapper(term: &Term, level: usize, _: &FormatConfig) -> Option<Vec<Word>> {
    if term.token != "S2Eintinf" {
        return None;
    }
    let [value] = term.children.as_deref()? else {
        return None;
    };
    value.is_bare().then(|| vec![token(&value.token, level)])
}

/// `S2Ecst(add_int_int)` --> `+`, `S2Ecst(name)` --> `name`
fn constant_ref(term: &Term, level: usize, _: &FormatConfig) -> Option<Vec<Word>> {
    if term.token != "S2Ecst" {
        return None;
    }
    let [name] = term.children.as_deref()? else {
        return None;
    };
    if !name.is_bare() {
        return None;
    }
    let word = match operator_alias(&name.token) {
        Some(alias) => operator(alias, level),
        None => token(&name.token, level),
    };
    Some(vec![word])
}

/// `S2Evar(name(12))` or `D2Evar(name(12))` --> `name`
fn var_wrapper(term: &Term, level: usize, _: &FormatConfig) -> Option<Vec<Word>> {
    if term.token != "D2Evar" && term.token != "S2Evar" {
        return None;
    }
    let [var] = term.children.as_deref()? else {
        return None;
    };
    let [stamp] = var.children.as_deref()? else {
        return None;
    };
    is_stamp(stamp).then(|| vec![token(&var.token, level)])
}

/// `S2Eapp(sym; lhs, rhs)` --> `(lhs sym rhs)`,
/// `S2Eapp(name; lhs, rhs)` --> `name(lhs, rhs)`
fn binary_app(term: &Term, level: usize, config: &FormatConfig) -> Option<Vec<Word>> {
    if term.token != "S2Eapp" {
        return None;
    }
    let [callee, lhs, rhs] = term.children.as_deref()? else {
        return None;
    };
    if callee.terminator != Terminator::Semicolon
        || lhs.terminator != Terminator::Comma
        || rhs.terminator != Terminator::None
    {
        return None;
    }

    let callee = bare_words(callee, level + 1, config);
    let lhs = bare_words(lhs, level + 1, config);
    let rhs = bare_words(rhs, level + 1, config);

    let infix = match callee.as_slice() {
        [word] if word.text.starts_with(is_symbol_char) => Some(word.text.clone()),
        _ => None,
    };

    let mut words = Vec::with_capacity(callee.len() + lhs.len() + rhs.len() + 3);
    match infix {
        Some(symbol) => {
            words.push(open(level));
            words.extend(lhs);
            words.push(operator(symbol, level + 1));
            words.extend(rhs);
            words.push(close(level));
        }
        None => {
            words.extend(callee);
            words.push(open(level));
            words.extend(lhs);
            words.push(separator(",", level + 1));
            words.extend(rhs);
            words.push(close(level));
        }
    }
    Some(words)
}

/// `S2Eeqeq(lhs; rhs)` --> `(lhs == rhs)`
fn eq_eq(term: &Term, level: usize, config: &FormatConfig) -> Option<Vec<Word>> {
    if term.token != "S2Eeqeq" {
        return None;
    }
    let [lhs, rhs] = term.children.as_deref()? else {
        return None;
    };
    if lhs.terminator != Terminator::Semicolon || rhs.terminator != Terminator::None {
        return None;
    }

    let mut words = vec![open(level)];
    words.extend(bare_words(lhs, level + 1, config));
    words.push(operator("==", level + 1));
    words.extend(bare_words(rhs, level + 1, config));
    words.push(close(level));
    Some(words)
}

/// `C3NSTRprop(C3TKmain(); prop)` --> `prop`
fn mode_wrapper(term: &Term, level: usize, config: &FormatConfig) -> Option<Vec<Word>> {
    if term.token != "C3NSTRprop" {
        return None;
    }
    let [mode, prop] = term.children.as_deref()? else {
        return None;
    };
    if mode.token != "C3TKmain" || mode.args_exact(0).is_none() {
        return None;
    }
    let mut words = Vec::new();
    term_words(prop, level, true, config, &mut words);
    Some(words)
}

/// `name(12)` --> `name`
fn indexed_name(term: &Term, level: usize, _: &FormatConfig) -> Option<Vec<Word>> {
    if term.kind != TermKind::PlainName {
        return None;
    }
    let [stamp] = term.children.as_deref()? else {
        return None;
    };
    is_stamp(stamp).then(|| vec![token(&term.token, level)])
}
