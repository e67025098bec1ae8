// Copyright (C) 2026 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! The declared set of matcher engines. Adding or removing an engine is a change to
//! `DECLARED_ENGINES`; there is no discovery at runtime.

pub mod fancy;
pub mod oniguruma;
pub mod rust_regex;

use matchbench_harness::{EngineDescriptor, MatchSemantics};

pub static DECLARED_ENGINES: [EngineDescriptor; 5] = [
    EngineDescriptor::new(
        rust_regex::SEARCH_NAME,
        MatchSemantics::Search,
        rust_regex::search,
    ),
    EngineDescriptor::new(
        rust_regex::FULL_NAME,
        MatchSemantics::FullMatch,
        rust_regex::full,
    ),
    EngineDescriptor::new(
        oniguruma::SEARCH_NAME,
        MatchSemantics::Search,
        oniguruma::search,
    ),
    EngineDescriptor::new(
        oniguruma::ANCHORED_NAME,
        MatchSemantics::AnchoredStart,
        oniguruma::anchored,
    ),
    EngineDescriptor::new(fancy::NAME, MatchSemantics::Search, fancy::engine),
];

pub fn declared_engines() -> &'static [EngineDescriptor] {
    &DECLARED_ENGINES
}
