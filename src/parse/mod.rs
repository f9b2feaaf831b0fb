/*
 * SPDX-License-Identifier: Apache-2.0
 */

mod pairs;
pub use pairs::parse_cookie;

mod set_cookie;
pub use set_cookie::parse_set_cookie;
