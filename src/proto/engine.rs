/*
 * Copyright 2026 Vantage Engineering
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Package `vantage.engine`: value and key primitives shared by the record
//! store, query and schema services.

/// A field value on the wire. Scalars travel as string-encoded singles,
/// lists as repeated strings.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Value {
    #[prost(oneof = "value::Value", tags = "1, 2")]
    pub value: Option<value::Value>,
}

pub mod value {
    /// Homogeneous list of string-encoded values.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Repeated {
        #[prost(string, repeated, tag = "1")]
        pub values: Vec<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(string, tag = "1")]
        Single(String),
        #[prost(message, tag = "2")]
        Repeated(Repeated),
    }
}

/// Identifies a record by a unique field and its value.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Key {
    #[prost(string, tag = "1")]
    pub field: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
}
