pub mod create_word;
