use std::collections::HashMap;

use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{Lexer, LexerOptions},
        rules::{Dialect, RuleSet},
    },
};

/// A lexer the host can route code blocks to.
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    pub name: String,
    pub aliases: Vec<String>,
    pub filenames: Vec<String>,
    pub rules: RuleSet,
}

impl LanguageDefinition {
    pub fn uwscr(dialect: Dialect) -> Result<LanguageDefinition, Error> {
        Ok(LanguageDefinition {
            name: String::from("UWSCR"),
            aliases: vec![String::from("uwscr")],
            filenames: vec![String::from("*.uws")],
            rules: RuleSet::new(dialect)?,
        })
    }

    pub fn tokenize<'a>(&'a self, source: &'a str, options: LexerOptions) -> Lexer<'a> {
        Lexer::new(source, &self.rules, options)
    }

    /// Whether the base name of `file` matches one of the filename patterns.
    pub fn matches_filename(&self, file: &str) -> bool {
        let base = file.rsplit(['/', '\\']).next().unwrap_or(file);
        self.filenames.iter().any(|pattern| glob_match(pattern, base))
    }
}

/// Lexers known to the host, addressable by alias or file name.
#[derive(Debug, Clone, Default)]
pub struct LexerRegistry {
    languages: Vec<LanguageDefinition>,
    by_alias: HashMap<String, usize>,
}

impl LexerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the UWSCR lexer already registered.
    pub fn with_defaults() -> Result<Self, Error> {
        let mut registry = Self::new();
        registry.register(LanguageDefinition::uwscr(Dialect::Current)?)?;
        Ok(registry)
    }

    /// Registers `language` under all of its aliases.
    ///
    /// Nothing is registered if any alias is already taken.
    pub fn register(&mut self, language: LanguageDefinition) -> Result<(), Error> {
        let aliases: Vec<String> = language.aliases.iter().map(|a| a.to_lowercase()).collect();

        for alias in &aliases {
            if self.by_alias.contains_key(alias) {
                return Err(Error::new(ErrorImpl::DuplicateAlias {
                    alias: alias.clone(),
                }));
            }
        }

        let index = self.languages.len();
        for alias in aliases {
            self.by_alias.insert(alias, index);
        }
        debug!("registered {} as {:?}", language.name, language.aliases);
        self.languages.push(language);

        Ok(())
    }

    pub fn by_alias(&self, alias: &str) -> Result<&LanguageDefinition, Error> {
        self.by_alias
            .get(&alias.to_lowercase())
            .map(|index| &self.languages[*index])
            .ok_or_else(|| {
                Error::new(ErrorImpl::UnknownLanguage {
                    name: alias.to_string(),
                })
            })
    }

    /// First registered language whose filename patterns match `file`.
    pub fn for_filename(&self, file: &str) -> Option<&LanguageDefinition> {
        self.languages.iter().find(|language| language.matches_filename(file))
    }

    /// Language for a code block: the explicit `alias` if given, else the
    /// lexer matching `file`, else the `uwscr` lexer.
    pub fn resolve(&self, alias: Option<&str>, file: Option<&str>) -> Result<&LanguageDefinition, Error> {
        if let Some(alias) = alias {
            return self.by_alias(alias);
        }

        match file.and_then(|file| self.for_filename(file)) {
            Some(language) => Ok(language),
            None => {
                debug!("no filename match for {:?}, using uwscr", file);
                self.by_alias("uwscr")
            }
        }
    }

    pub fn aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = self.by_alias.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Shell-style match supporting `*` and `?`.
fn glob_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let (mut p, mut n) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while n < name.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == name[n]) {
            p += 1;
            n += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some((p, n));
            p += 1;
        } else if let Some((star_p, star_n)) = star {
            p = star_p + 1;
            n = star_n + 1;
            star = Some((star_p, star_n + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|c| *c == '*')
}

#[cfg(test)]
mod glob_tests {
    use super::glob_match;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*.uws", "main.uws"));
        assert!(glob_match("*.uws", ".uws"));
        assert!(!glob_match("*.uws", "main.uws.bak"));
        assert!(!glob_match("*.uws", "main.UWS"));
        assert!(glob_match("a?c*", "abcdef"));
        assert!(glob_match("*", ""));
    }
}
