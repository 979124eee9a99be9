// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
use std::fmt;

use thiserror::Error;

use crate::geometry::GeometryKind;

/// Which argument of a distance call an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Left => write!(f, "left"),
            Operand::Right => write!(f, "right"),
        }
    }
}

/// Errors raised by the distance entry points
///
/// Numerical degeneracies (zero-length segments, zero-area boxes, collinear input)
/// are handled by the algorithms themselves and never surface as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    #[error("{operand} operand is an empty {kind}")]
    EmptyInput { operand: Operand, kind: GeometryKind },
    #[error("distance between {left} and {right} is not supported")]
    UnsupportedCombination {
        left: &'static str,
        right: &'static str,
    },
    #[error("invalid distance option: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, DistanceError>;
