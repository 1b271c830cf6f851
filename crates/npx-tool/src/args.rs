/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

// src/args.rs
// ProcessArguments is an ordered command-line argument builder. It keeps
// two views of the same arguments: a rendered command-line string (with
// quoting applied, used for logging and assertions) and the token list
// handed to std::process::Command. Free-form text is split into tokens
// the way a command-line parser would split it.

use std::fmt;

const REDACTED: &str = "[REDACTED]";
const DEFAULT_SWITCH_SEPARATOR: &str = " ";

// ProcessArgument is a single entry in a ProcessArguments builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessArgument {
    // Text is rendered verbatim and tokenized for the child process.
    Text(String),
    // Token is a single, already split argument. It is quoted in the
    // rendered line only when it needs to be.
    Token(String),
    // Quoted wraps the rendered inner argument in double quotes,
    // unless it is already quoted.
    Quoted(Box<ProcessArgument>),
    // Switch renders as <switch><separator><value>.
    Switch {
        switch: String,
        separator: String,
        value: Box<ProcessArgument>,
    },
    // Secret renders normally but is redacted by render_safe.
    Secret(Box<ProcessArgument>),
}

impl ProcessArgument {
    pub fn text(value: impl Into<String>) -> Self {
        ProcessArgument::Text(value.into())
    }

    pub fn token(value: impl Into<String>) -> Self {
        ProcessArgument::Token(value.into())
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        ProcessArgument::Quoted(Box::new(Self::text(value)))
    }

    // render returns the argument as it appears on a command line.
    pub fn render(&self) -> String {
        match self {
            ProcessArgument::Text(value) => value.clone(),
            ProcessArgument::Token(value) => render_token(value),
            ProcessArgument::Quoted(inner) => quote(&inner.render()),
            ProcessArgument::Switch {
                switch,
                separator,
                value,
            } => format!("{switch}{separator}{}", value.render()),
            ProcessArgument::Secret(inner) => inner.render(),
        }
    }

    // render_safe is render with secret values replaced.
    pub fn render_safe(&self) -> String {
        match self {
            ProcessArgument::Text(value) => value.clone(),
            ProcessArgument::Token(value) => render_token(value),
            ProcessArgument::Quoted(inner) => quote(&inner.render_safe()),
            ProcessArgument::Switch {
                switch,
                separator,
                value,
            } => format!("{switch}{separator}{}", value.render_safe()),
            ProcessArgument::Secret(_) => REDACTED.to_string(),
        }
    }

    // raw returns the unquoted value passed to the operating system.
    fn raw(&self) -> String {
        match self {
            ProcessArgument::Text(value) | ProcessArgument::Token(value) => value.clone(),
            ProcessArgument::Quoted(inner) => unquote(&inner.raw()).to_string(),
            ProcessArgument::Switch {
                switch,
                separator,
                value,
            } => format!("{switch}{separator}{}", value.raw()),
            ProcessArgument::Secret(inner) => inner.raw(),
        }
    }

    fn push_tokens(&self, tokens: &mut Vec<String>) {
        match self {
            ProcessArgument::Text(value) => tokens.extend(split_command_line(value)),
            ProcessArgument::Switch {
                switch,
                separator,
                value,
            } if separator == DEFAULT_SWITCH_SEPARATOR => {
                tokens.push(switch.clone());
                tokens.push(value.raw());
            }
            ProcessArgument::Secret(inner) => inner.push_tokens(tokens),
            other => tokens.push(other.raw()),
        }
    }
}

impl fmt::Display for ProcessArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_safe())
    }
}

fn is_quoted(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
}

fn quote(value: &str) -> String {
    if is_quoted(value) {
        value.to_string()
    } else {
        format!("\"{value}\"")
    }
}

fn unquote(value: &str) -> &str {
    if is_quoted(value) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn render_token(value: &str) -> String {
    if !value.is_empty() && !value.contains(|c: char| c.is_whitespace() || c == '"') {
        return value.to_string();
    }
    format!("\"{}\"", value.replace('"', "\\\""))
}

// split_command_line tokenizes a command line: unquoted whitespace
// separates tokens, double quotes group and are removed, and backslashes
// escape only when they precede a double quote (2n+1 backslashes give n
// backslashes and a literal quote).
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut backslashes = 0;

    for c in line.chars() {
        match c {
            '\\' => {
                backslashes += 1;
                in_token = true;
            }
            '"' => {
                current.extend(std::iter::repeat_n('\\', backslashes / 2));
                if backslashes % 2 == 1 {
                    current.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
                backslashes = 0;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                current.extend(std::iter::repeat_n('\\', backslashes));
                backslashes = 0;
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.extend(std::iter::repeat_n('\\', backslashes));
                backslashes = 0;
                current.push(c);
                in_token = true;
            }
        }
    }

    current.extend(std::iter::repeat_n('\\', backslashes));
    if in_token {
        tokens.push(current);
    }
    tokens
}

// ProcessArguments is an ordered list of process arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessArguments {
    arguments: Vec<ProcessArgument>,
}

impl ProcessArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn push(&mut self, argument: ProcessArgument) -> &mut Self {
        self.arguments.push(argument);
        self
    }

    pub fn append(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(ProcessArgument::text(text))
    }

    // append_token adds one argument that reaches the child untouched.
    pub fn append_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.push(ProcessArgument::token(token))
    }

    pub fn append_quoted(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(ProcessArgument::quoted(text))
    }

    pub fn append_secret(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(ProcessArgument::Secret(Box::new(ProcessArgument::text(
            text,
        ))))
    }

    pub fn append_quoted_secret(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(ProcessArgument::Quoted(Box::new(ProcessArgument::Secret(
            Box::new(ProcessArgument::text(text)),
        ))))
    }

    pub fn append_switch(&mut self, switch: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push_switch(switch.into(), ProcessArgument::text(value))
    }

    pub fn append_switch_quoted(
        &mut self,
        switch: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.push_switch(switch.into(), ProcessArgument::quoted(value))
    }

    pub fn append_switch_secret(
        &mut self,
        switch: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.push_switch(
            switch.into(),
            ProcessArgument::Secret(Box::new(ProcessArgument::text(value))),
        )
    }

    pub fn append_switch_quoted_secret(
        &mut self,
        switch: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.push_switch(
            switch.into(),
            ProcessArgument::Secret(Box::new(ProcessArgument::quoted(value))),
        )
    }

    fn push_switch(&mut self, switch: String, value: ProcessArgument) -> &mut Self {
        self.push(ProcessArgument::Switch {
            switch,
            separator: DEFAULT_SWITCH_SEPARATOR.to_string(),
            value: Box::new(value),
        })
    }

    // extend appends every argument of other, preserving order.
    pub fn extend(&mut self, other: &ProcessArguments) -> &mut Self {
        self.arguments.extend(other.arguments.iter().cloned());
        self
    }

    // render joins the rendered arguments with single spaces.
    pub fn render(&self) -> String {
        self.arguments
            .iter()
            .map(ProcessArgument::render)
            .collect::<Vec<_>>()
            .join(" ")
    }

    // render_safe is render with secrets redacted; use it for logs.
    pub fn render_safe(&self) -> String {
        self.arguments
            .iter()
            .map(ProcessArgument::render_safe)
            .collect::<Vec<_>>()
            .join(" ")
    }

    // to_process_args returns the tokens to hand to the child process.
    pub fn to_process_args(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.arguments.len());
        for argument in &self.arguments {
            argument.push_tokens(&mut tokens);
        }
        tokens
    }
}

impl fmt::Display for ProcessArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_safe())
    }
}

impl From<&str> for ProcessArguments {
    fn from(value: &str) -> Self {
        let mut arguments = Self::new();
        arguments.append(value);
        arguments
    }
}

impl From<String> for ProcessArguments {
    fn from(value: String) -> Self {
        let mut arguments = Self::new();
        arguments.append(value);
        arguments
    }
}

// Collecting treats every item as one already split token.
impl<S: Into<String>> FromIterator<S> for ProcessArguments {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            arguments: iter.into_iter().map(ProcessArgument::token).collect(),
        }
    }
}
