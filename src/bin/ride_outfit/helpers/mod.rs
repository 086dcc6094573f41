// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for ride-outfit
// ABOUTME: Provides JSON output and input reading helpers

pub mod display;
