// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the scrub bar.

pub mod bar;
