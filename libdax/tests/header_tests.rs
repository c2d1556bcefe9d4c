#[cfg(test)]
mod header_tests {
    use libdax_audio::{BitReader, BitWriter, DaxError, StreamHeader, HEADER_BITS};

    fn sample_header() -> StreamHeader {
        StreamHeader {
            sample_rate: 44100,
            block_size: 1024,
            kept_coeffs: 205,
            quant_bits: 16,
            total_frames: 44100,
        }
    }

    #[test]
    fn test_header_occupies_thirteen_bytes() {
        assert_eq!(HEADER_BITS, 104);

        let mut bits = BitWriter::new(Vec::new());
        sample_header().write_to(&mut bits).unwrap();
        let bytes = bits.finish().unwrap();
        assert_eq!(bytes.len(), 13);
    }

    #[test]
    fn test_header_round_trip() {
        let header = sample_header();
        let mut bits = BitWriter::new(Vec::new());
        header.write_to(&mut bits).unwrap();
        let bytes = bits.finish().unwrap();

        let mut bits = BitReader::new(&bytes[..]);
        let parsed = StreamHeader::read_from(&mut bits).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_field_wire_order() {
        let header = StreamHeader {
            sample_rate: 0x0102_0304,
            block_size: 0x0506,
            kept_coeffs: 0x0708,
            quant_bits: 0x09,
            total_frames: 0x0A0B_0C0D,
        };
        let mut bits = BitWriter::new(Vec::new());
        header.write_to(&mut bits).unwrap();
        let bytes = bits.finish().unwrap();
        assert_eq!(
            bytes,
            vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D]
        );
    }

    #[test]
    fn test_block_count_rounds_up() {
        let mut header = sample_header();
        header.block_size = 256;

        header.total_frames = 1000;
        assert_eq!(header.num_blocks(), 4);
        header.total_frames = 1024;
        assert_eq!(header.num_blocks(), 4);
        header.total_frames = 1025;
        assert_eq!(header.num_blocks(), 5);
        header.total_frames = 1;
        assert_eq!(header.num_blocks(), 1);
    }

    #[test]
    fn test_invalid_fields_are_rejected() {
        let mut header = sample_header();
        header.sample_rate = 0;
        assert!(matches!(
            header.validate(),
            Err(DaxError::MalformedHeader(_))
        ));

        let mut header = sample_header();
        header.block_size = 0;
        assert!(matches!(
            header.validate(),
            Err(DaxError::MalformedHeader(_))
        ));

        let mut header = sample_header();
        header.kept_coeffs = header.block_size + 1;
        assert!(matches!(
            header.validate(),
            Err(DaxError::MalformedHeader(_))
        ));

        let mut header = sample_header();
        header.quant_bits = 0;
        assert!(matches!(
            header.validate(),
            Err(DaxError::MalformedHeader(_))
        ));

        let mut header = sample_header();
        header.quant_bits = 65;
        assert!(matches!(
            header.validate(),
            Err(DaxError::MalformedHeader(_))
        ));

        let mut header = sample_header();
        header.total_frames = 0;
        assert!(matches!(
            header.validate(),
            Err(DaxError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_keeping_every_coefficient_is_legal() {
        let mut header = sample_header();
        header.kept_coeffs = header.block_size;
        assert!(header.validate().is_ok());
    }

    #[test]
    fn test_sixty_four_quant_bits_is_legal() {
        let mut header = sample_header();
        header.quant_bits = 64;
        assert!(header.validate().is_ok());
    }

    #[test]
    fn test_parsing_validates() {
        // kept_coeffs (2048) > block_size (1024)
        let mut bits = BitWriter::new(Vec::new());
        bits.write_n_bits(44100, 32).unwrap();
        bits.write_n_bits(1024, 16).unwrap();
        bits.write_n_bits(2048, 16).unwrap();
        bits.write_n_bits(16, 8).unwrap();
        bits.write_n_bits(44100, 32).unwrap();
        let bytes = bits.finish().unwrap();

        let mut bits = BitReader::new(&bytes[..]);
        assert!(matches!(
            StreamHeader::read_from(&mut bits),
            Err(DaxError::MalformedHeader(_))
        ));
    }
}
