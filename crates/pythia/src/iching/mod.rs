pub mod cast;
pub mod lines;
pub mod table;
pub mod trigram;

pub use cast::{
    cast, cast_lines, resolve, trigrams_of_pattern, Casting, CoinSource, Hexagram, Numbering,
    RngCoins,
};
pub use lines::{changing_indices, line_pattern, transform, Coin, Line};
pub use table::{
    ensure_complete, king_wen_number, record, trigrams_of, HexagramRecord, HEXAGRAMS, KING_WEN,
};
pub use trigram::Trigram;
