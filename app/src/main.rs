/*
 * // Copyright (c) the primext developers 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use bitflags::bitflags;
use primext::{ClampToBounds, EqualsWithin, FlagsExt, Normalize, NormalizeInt, ToFlags};
use rand::Rng;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Access: u8 {
        const READ = 0b0001;
        const WRITE = 0b0010;
        const EXECUTE = 0b0100;
        const SHARED = 0b1000;
    }
}

fn main() {
    let mut rng = rand::rng();

    let celsius: f64 = rng.random_range(-40.0..120.0);
    let fahrenheit = celsius.normalize(0.0, 100.0, 32.0, 212.0);
    println!("{:.2} C -> {:.2} F", celsius, fahrenheit);
    println!(
        "back to {:.2} C, matches: {}",
        fahrenheit.normalize(32.0, 212.0, 0.0, 100.0),
        fahrenheit
            .normalize(32.0, 212.0, 0.0, 100.0)
            .equals_within(celsius, 1e-9)
    );

    let sample: u16 = rng.random_range(0..1024);
    let level = sample.normalize_int(0, 1023, 0, 255) as u8;
    println!("10 bit sample {} -> 8 bit level {}", sample, level);
    println!(
        "percentage {:.1}%",
        sample.normalize(0, 1023, 0, 100).clamp_to_bounds(0., 100.)
    );

    match 7i32.try_normalize(3, 3, 0, 10) {
        Ok(v) => println!("unexpected remap {}", v),
        Err(err) => println!("degenerate range rejected: {}", err),
    }

    println!(
        "0.1 as f64 and as f32 equal within epsilon: {}",
        0.1f64.approx_eq(0.1f32)
    );

    let granted = [Access::READ, Access::EXECUTE].into_iter().to_flags();
    println!("granted {:?}", granted);
    for flag in granted.enumerate_flags() {
        println!("  single flag {:?}", flag);
    }
    println!(
        "can touch: {}, can write and share: {}, is exactly rx: {}",
        granted.has_any_flag_of(&[Access::WRITE, Access::EXECUTE]),
        granted.has_any_flag([Access::WRITE | Access::SHARED]),
        granted.equals_any_of(&[Access::READ, Access::READ | Access::EXECUTE])
    );
    println!("none set splits into {:?}", Access::empty().to_single_flags());
}
