//! Interactive menus and the selector backends behind them

pub mod dialoguer_selector;
pub mod fzf;
pub mod menus;
pub mod selector;
