pub mod prime_table;
