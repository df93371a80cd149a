// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod db;
pub mod export;
pub mod filters;
pub mod models;
pub mod prefs;
pub mod series;
pub mod stats;
pub mod storage;
pub mod store;
pub mod utils;
pub mod validation;
pub mod commands;
