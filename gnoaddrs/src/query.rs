/// Selects every transaction carrying at least one of the four address-bearing
/// message kinds, along with the block height it landed in.
pub const ALL_TRANSACTIONS_QUERY: &str = r#"query getAllTransactions {
  getTransactions(
    where: { _or: [
      {messages: {value: {BankMsgSend: {from_address: {exists: true}}}}},
      {messages: {value: {MsgRun: {caller: {exists: true}}}}},
      {messages: {value: {MsgAddPackage: {creator: {exists: true}}}}},
      {messages: {value: {MsgCall: {caller: {exists: true}}}}}]},
  ) {
    block_height
    messages {
      value {
        ... on BankMsgSend {
          __typename
          from_address
          to_address
          amount
        }
        ... on MsgCall {
          __typename
          caller
        }
        ... on MsgAddPackage {
          __typename
          creator
        }
        ... on MsgRun {
          __typename
          caller
        }
      }
    }
  }
}"#;

pub fn all_transactions_query() -> &'static str {
    ALL_TRANSACTIONS_QUERY
}
