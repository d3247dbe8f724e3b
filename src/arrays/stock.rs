// Daily prices; a trade is buy on one day, sell on a later one.

/// Best profit from one trade, 0 if prices only fall.
pub fn max_profit_once(prices: &[i64]) -> i64 {
    let mut min_price_so_far = i64::MAX;
    let mut max_profit = 0;

    for &price in prices {
        min_price_so_far = min_price_so_far.min(price);
        max_profit = max_profit.max(price.saturating_sub(min_price_so_far));
    }
    max_profit
}

/// Best total of at most two trades, the second bought after the first is sold.
///
/// `first[i]` is the best single trade within days `0..=i`; a backward scan supplies the best
/// trade starting at day `i` or later, and the answer is the best split point.
pub fn max_profit_twice(prices: &[i64]) -> i64 {
    let mut first = Vec::with_capacity(prices.len());
    let mut min_price_so_far = i64::MAX;
    let mut max_profit = 0;
    for &price in prices {
        min_price_so_far = min_price_so_far.min(price);
        max_profit = max_profit.max(price.saturating_sub(min_price_so_far));
        first.push(max_profit);
    }

    let mut best = max_profit;
    let mut max_price_so_far = i64::MIN;
    let mut second = 0;
    for i in (1..prices.len()).rev() {
        max_price_so_far = max_price_so_far.max(prices[i]);
        second = second.max(max_price_so_far.saturating_sub(prices[i]));
        best = best.max(first[i - 1].saturating_add(second));
    }
    best
}
