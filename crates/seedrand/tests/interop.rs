// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod interop_tests {
    use rand::Rng;
    use rand::seq::SliceRandom;
    use seedrand::Lcg32;

    #[test]
    fn test_drives_rand_algorithms_deterministically() {
        let mut rng1 = Lcg32::from_number(12345);
        let mut rng2 = Lcg32::from_number(12345);

        let a: Vec<u32> = (0..16).map(|_| rng1.random_range(0..1000)).collect();
        let b: Vec<u32> = (0..16).map(|_| rng2.random_range(0..1000)).collect();

        assert_eq!(a, b);
        assert!(a.iter().all(|v| *v < 1000));
    }

    #[test]
    fn test_slice_shuffle_via_rand() {
        let mut rng = Lcg32::from_number(1);
        let mut items: Vec<u8> = (0..32).collect();

        items.shuffle(&mut rng);
        items.sort_unstable();

        assert_eq!(items, (0..32).collect::<Vec<u8>>());
    }

    #[test]
    fn test_next_u64_consumes_two_steps() {
        let mut rng = Lcg32::from_number(12345);
        let mut reference = Lcg32::from_number(12345);

        let value = rand::RngCore::next_u64(&mut rng);
        let low = u64::from(reference.next_u32());
        let high = u64::from(reference.next_u32());

        assert_eq!(value, (high << 32) | low);
    }
}
