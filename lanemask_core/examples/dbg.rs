use lanemask_core::{range_mask, strided_mask, PermuteMask};

fn main() {
    println!("=== permutation masks ===");
    for mask in PermuteMask::ALL {
        let bits = mask.bits();
        println!(
            "{}: lanes {:?} bits {} numeral {} => {}",
            mask,
            mask.lanes(),
            bits.iter().map(|b| if b { '1' } else { '0' }).collect::<String>(),
            bits.numeral(),
            bits
        );
    }
    println!("=== strided masks ===");
    for repeat in [2, 4, 8, 16, 32] {
        for start in 0..repeat.min(4) {
            match strided_mask(start, repeat) {
                Ok(bits) => println!("start {:2} every {:2}: {}", start, repeat, bits),
                Err(e) => println!("start {:2} every {:2}: {}", start, repeat, e),
            }
        }
    }
    println!("=== lane range masks ===");
    for (lanes, lane_bits) in [(4, 32), (8, 32), (16, 32)] {
        let width = lanes * lane_bits;
        for lane in 0..lanes {
            if let Ok(bits) = range_mask(lane * lane_bits, (lane + 1) * lane_bits, width) {
                println!("{}-bit lane {:2}: {}", width, lane, bits);
            }
        }
    }
}
