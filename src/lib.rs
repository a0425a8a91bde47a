/*!

# characters_graphql

A [GraphQL][GraphQL] service over a fixed list of [Rick and Morty][Rick and Morty API] characters,
built on [Juniper][Juniper] and served through [AWS Api Gateway][AWS Api Gateway] on the
[AWS Lambda Runtime][AWS Lambda Runtime].

The schema has a single query field:

```graphql
type Query {
    characters(filter: FilterCharacter): [Character!]!
}

input FilterCharacter {
    name: String
    names: [String]
    status: String
}
```

Without a `filter` every character is returned. `name` and `names` match substrings of the
character name (`name` wins when both are given), `status` must match exactly, and all given
criteria have to hold.

## Example

```no_run
use characters_graphql::{schema, Characters, Context, GraphQLHandler};

let characters = Characters::sample().expect("bundled data is valid");
let handler = GraphQLHandler::new(schema(), Context::new(characters)).debug(true);
```

[AWS Api Gateway]: https://aws.amazon.com/api-gateway/
[AWS Lambda Runtime]: https://github.com/awslabs/aws-lambda-rust-runtime
[Juniper]: https://github.com/graphql-rust/juniper
[GraphQL]: http://graphql.org
[Rick and Morty API]: https://rickandmortyapi.com/graphql

*/

pub mod config;
pub mod context;
pub mod data;
pub mod filter;
pub mod gateway;
pub mod types;

pub use context::Context;
pub use data::{Characters, DataError};
pub use filter::{CharacterFilter, FilterSpec, NameFilter};
pub use gateway::{GraphQLHandler, HandlerFuture, ProxyRequest};
pub use types::{schema, Character, FilterCharacter, Query, Schema};
