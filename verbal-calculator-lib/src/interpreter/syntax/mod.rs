pub mod expression_chain;
