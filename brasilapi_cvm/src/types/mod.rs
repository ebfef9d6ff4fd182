mod broker;
pub use self::broker::Broker;
