//! Extraction of structured values from raw compiler flags.

use std::collections::HashMap;

/// Compiler options split into values of registered flags and everything
/// else.
///
/// A registered flag may appear in single form (`-Dfoo`) or split form
/// (`-D foo`). Single-form tokens are decomposed and also kept verbatim in
/// [`uninterpreted_options`](Self::uninterpreted_options); split-form pairs
/// are consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnfilteredCompilerOptions {
    extracted: HashMap<String, Vec<String>>,
    uninterpreted: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UnfilteredCompilerOptionsBuilder {
    prefixes: Vec<String>,
}

impl UnfilteredCompilerOptions {
    pub fn builder() -> UnfilteredCompilerOptionsBuilder {
        UnfilteredCompilerOptionsBuilder::default()
    }

    /// Values extracted for `prefix`, in input order. Empty for unregistered
    /// prefixes.
    pub fn extracted_option_values(&self, prefix: &str) -> &[String] {
        self.extracted.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn uninterpreted_options(&self) -> &[String] {
        &self.uninterpreted
    }

    pub fn into_uninterpreted_options(self) -> Vec<String> {
        self.uninterpreted
    }
}

impl UnfilteredCompilerOptionsBuilder {
    pub fn register_single_or_split_option(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !prefix.is_empty() && !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
        self
    }

    pub fn build<I, S>(self, options: I) -> UnfilteredCompilerOptions
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extracted: HashMap<String, Vec<String>> = self
            .prefixes
            .iter()
            .map(|p| (p.clone(), Vec::new()))
            .collect();
        let mut uninterpreted = Vec::new();

        let mut tokens = options.into_iter();
        while let Some(token) = tokens.next() {
            let token = token.as_ref();

            if let Some(values) = extracted.get_mut(token) {
                // Split form: the value is the next token. A dangling flag yields nothing.
                if let Some(value) = tokens.next() {
                    values.push(value.as_ref().to_string());
                }
                continue;
            }

            if let Some(prefix) = self.longest_prefix_of(token) {
                if let Some(values) = extracted.get_mut(prefix) {
                    values.push(token[prefix.len()..].to_string());
                }
            }
            uninterpreted.push(token.to_string());
        }

        UnfilteredCompilerOptions {
            extracted,
            uninterpreted,
        }
    }

    fn longest_prefix_of(&self, token: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .filter(|p| token.len() > p.len() && token.starts_with(p.as_str()))
            .max_by_key(|p| p.len())
            .map(String::as_str)
    }
}
