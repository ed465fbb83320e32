//! slidenav: present markdown slides in the terminal with vim-style keys.

pub mod deck;
pub mod navigation;
pub mod tui;
pub mod types;
