// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the remote content pipeline
//!
//! Feature: remote-content.feature

mod support;

mod config_tests;
