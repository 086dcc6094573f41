// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for ride-outfit
// ABOUTME: Provides recommend, table check, worn-outfit validation, and domain listing commands

pub mod domains;
pub mod recommend;
pub mod tables;
pub mod validate;
