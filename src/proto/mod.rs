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

//! Wire-format definitions for the Vantage gRPC API.
//!
//! The interface definition is owned by the platform; this module is a
//! hand-maintained prost mirror of it, one submodule per service package.
//! Message names, tag numbers and enum values must track the platform IDL
//! exactly — they are the wire contract, not something to redesign here.

pub mod api;
pub mod autocomplete;
pub mod bayes;
pub mod engine;
pub mod query;
pub mod record;
pub mod rpc;
pub mod schema;
