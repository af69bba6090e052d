pub fn squared_euclidean<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    let mut sum = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        sum += (x - y).powi(2);
    }
    sum
}

pub fn euclidean<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    squared_euclidean(a, b).sqrt()
}

pub(crate) fn sub<const D: usize>(a: &[f64; D], b: &[f64; D]) -> [f64; D] {
    let mut diff = [0.0; D];
    for (i, x) in diff.iter_mut().enumerate() {
        *x = a[i] - b[i];
    }
    diff
}

pub(crate) fn dot<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

pub(crate) fn midpoint<const D: usize>(a: &[f64; D], b: &[f64; D]) -> [f64; D] {
    let mut mid = [0.0; D];
    for (i, x) in mid.iter_mut().enumerate() {
        *x = 0.5 * a[i] + 0.5 * b[i];
    }
    mid
}

#[cfg(test)]
mod tests {
    use super::{dot, euclidean, midpoint, squared_euclidean, sub};

    #[test]
    fn distances() {
        let a = [1.0, 2.0];
        let b = [4.0, 6.0];
        assert_eq!(squared_euclidean(&a, &b), 25.0);
        assert_eq!(euclidean(&a, &b), 5.0);
        assert_eq!(euclidean(&a, &a), 0.0);
    }

    #[test]
    fn arithmetic() {
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, 2.0, 1.0];
        assert_eq!(sub(&a, &b), [-2.0, 0.0, 2.0]);
        assert_eq!(dot(&a, &b), 10.0);
        assert_eq!(midpoint(&a, &b), [2.0, 2.0, 2.0]);
    }
}
