use super::*;

#[test]
fn can_format_points() {
    assert_eq!(format_points(&[vec![1., -5.], vec![3.5, -1.]]), "[(1, -5), (3.5, -1)]");
    assert_eq!(format_points(&[]), "[]");
}

#[test]
fn can_write_text_front() {
    let mut buffer = Vec::new();

    {
        let mut writer = BufWriter::new(&mut buffer);
        write_text_front(&mut writer, "results/a.txt", &[vec![1100., -4500.], vec![1300., -5600.]]).unwrap();
        writer.flush().unwrap();
    }

    assert_eq!(String::from_utf8(buffer).unwrap(), "results/a.txt : [(1100, -4500), (1300, -5600)]\n");
}

#[test]
fn can_write_text_fronts() {
    let mut buffer = Vec::new();

    {
        let mut writer = BufWriter::new(&mut buffer);
        write_text_fronts(&mut writer, "a.txt", &[vec![vec![1., -5.]], vec![vec![2., -3.], vec![4., -4.]]]).unwrap();
        writer.flush().unwrap();
    }

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "a.txt : front 0 : [(1, -5)]\na.txt : front 1 : [(2, -3), (4, -4)]\n"
    );
}
