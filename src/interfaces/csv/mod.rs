pub mod member_writer;
pub mod payment_reader;
